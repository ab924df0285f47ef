//! HTML for the question form.
//!
//! One page: a header, a textarea, a submit button and an answer
//! area. The textarea is always rendered empty, which clears the
//! user's input after each question. Every piece of user or corpus
//! text goes through [`escape_html`].

use crate::domain::outcome::Reply;

const STYLE: &str = "\
body{font-family:sans-serif;background:#f0f2f5;display:flex;justify-content:center;padding:20px}\
.main-container{background:#fff;padding:40px;border-radius:15px;max-width:700px;width:100%}\
.input-box{width:100%;min-height:100px;padding:15px;box-sizing:border-box}\
.submit-btn{width:100%;padding:15px;margin-top:10px}\
.answer-box{margin-top:20px;padding:20px;background:#f8f9fa;min-height:80px}\
.user-question{color:#0056b3}.bot-answer{color:#28a745}.error-message{color:#dc3545}";

/// Render the full page, with the answer area filled when `reply` is set.
pub fn render_page(reply: Option<&Reply>) -> String {
    let answer = reply.map(render_reply).unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>IntelliChat Bot</title>\n\
<style>{STYLE}</style>\n\
</head>\n\
<body>\n\
<div class=\"main-container\">\n\
<div class=\"header\">\n\
<h1 class=\"title\">IntelliChat Bot</h1>\n\
<p class=\"subtitle\">Your intelligent assistant is here to help!</p>\n\
</div>\n\
<form method=\"post\" action=\"/\">\n\
<textarea id=\"user-input\" name=\"question\" class=\"input-box\" rows=\"4\" placeholder=\"Ask me anything...\"></textarea>\n\
<button id=\"submit-button\" type=\"submit\" class=\"submit-btn\">Get Answer</button>\n\
</form>\n\
<div id=\"output-area\" class=\"answer-box\">{answer}</div>\n\
</div>\n\
</body>\n\
</html>\n"
    )
}

/// Render one reply as the contents of the answer area.
pub fn render_reply(reply: &Reply) -> String {
    match reply {
        Reply::Exchange { .. } => {
            let lines = reply.lines();
            let classes = ["user-question message", "bot-answer message"];
            let paragraphs: String = lines
                .iter()
                .zip(classes)
                .map(|(line, class)| format!("<p class=\"{class}\">{}</p>", escape_html(line)))
                .collect();
            format!("<div>{paragraphs}</div>")
        }
        Reply::Invalid | Reply::Failure => {
            let message = reply.lines().join(" ");
            format!("<div class=\"bot-message error-message\">{}</div>", escape_html(&message))
        }
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::INVALID_QUESTION_MESSAGE;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_empty_page_has_form_and_no_answer() {
        let html = render_page(None);
        assert!(html.contains("<textarea id=\"user-input\" name=\"question\""));
        assert!(html.contains("Get Answer"));
        assert!(html.contains("<div id=\"output-area\" class=\"answer-box\"></div>"));
    }

    #[test]
    fn test_exchange_is_escaped() {
        let reply = Reply::Exchange {
            question: "<b>refund?</b>".into(),
            answer:   "30 days".into(),
        };
        let html = render_reply(&reply);
        assert!(html.contains("You: &lt;b&gt;refund?&lt;/b&gt;"));
        assert!(html.contains("<p class=\"bot-answer message\">Bot: 30 days</p>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_validation_message() {
        let html = render_page(Some(&Reply::Invalid));
        assert!(html.contains("error-message"));
        assert!(html.contains(INVALID_QUESTION_MESSAGE));
    }
}
