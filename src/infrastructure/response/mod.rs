use once_cell::sync::Lazy;
use regex::Regex;

static FIELD_LABEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(TESTNAME|DEVICE|STATUS|ROOT CAUSE|SOLUTION)\s*:").unwrap());

// Longest alternatives first so "PASSED" never gets a partial "PASS" badge.
static STATUS_KEYWORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"FAILURE|SUCCESS|PASSED|FAILED|PASS").unwrap());

const GREEN: &str = "#16a34a";
const RED: &str = "#dc2626";

/// Escapes HTML metacharacters. The model response is untrusted text; the
/// badge and label markup added afterwards is the only HTML that survives.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn badge(keyword: &str) -> String {
    let color = match keyword {
        "FAILED" | "FAILURE" => RED,
        _ => GREEN,
    };
    format!(
        "<span style=\"background-color:{};color:white;padding:2px 6px;border-radius:4px;\">{}</span>",
        color, keyword
    )
}

/// Turns the raw model summary into the styled HTML body: escape, newline to
/// `<br>`, bold the five field labels, badge the status keywords.
///
/// Keyword matching is deliberately unanchored (a keyword inside a longer
/// word still gets a badge), mirroring the plain substring substitution the
/// summary format grew up with.
pub fn format_summary(summary: &str) -> String {
    let escaped = escape_html(summary);
    let with_breaks = escaped.replace('\n', "<br>");
    let with_labels = FIELD_LABEL_PATTERN.replace_all(&with_breaks, "<b>$1:</b>");
    STATUS_KEYWORD_PATTERN
        .replace_all(&with_labels, |caps: &regex::Captures| badge(&caps[0]))
        .into_owned()
}

/// Wraps the formatted summary in the report card shown on the page.
pub fn render_summary_card(summary: &str) -> String {
    format!(
        "<h3>\u{1F4CB} Summary Report</h3>\n\
         <div style=\"background-color:#f9fafb;border:1px solid #e5e7eb;border-radius:12px;\
         padding:24px;box-shadow:0 2px 6px rgba(0,0,0,0.05);\
         font-family:'Inter',sans-serif;\">{}</div>",
        format_summary(summary)
    )
}

/// Shown when no file has been uploaded yet. A terminal state, not an error.
pub const PLACEHOLDER_HTML: &str = "<div style=\"background-color:#eff6ff;\
border:1px solid #bfdbfe;border-radius:8px;padding:16px;\">Please upload a \
<code>.txt</code> test log file to get the summary report.</div>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(format_summary("line one\nline two"), "line one<br>line two");
    }

    #[test]
    fn test_field_labels_are_bolded() {
        let html = format_summary("TESTNAME: wifi_scan");
        assert!(html.contains("<b>TESTNAME:</b> wifi_scan"));
    }

    #[test]
    fn test_label_with_spaced_colon_loses_the_space() {
        let html = format_summary("DEVICE : stb-42");
        assert!(html.contains("<b>DEVICE:</b> stb-42"));
    }

    #[test]
    fn test_two_word_label_is_bolded() {
        let html = format_summary("ROOT CAUSE : dhcp lease expired");
        assert!(html.contains("<b>ROOT CAUSE:</b> dhcp lease expired"));
    }

    #[test]
    fn test_other_colons_are_untouched() {
        let html = format_summary("timestamp: 12:30:05");
        assert_eq!(html, "timestamp: 12:30:05");
    }

    #[test]
    fn test_failed_gets_red_badge() {
        let html = format_summary("STATUS : FAILED");
        assert!(html.contains("background-color:#dc2626"));
        assert!(html.contains(">FAILED</span>"));
    }

    #[test]
    fn test_passed_gets_a_single_green_badge() {
        let html = format_summary("PASSED");
        assert_eq!(
            html,
            "<span style=\"background-color:#16a34a;color:white;padding:2px 6px;border-radius:4px;\">PASSED</span>"
        );
        // Exactly one span, no nested partial "PASS" badge.
        assert_eq!(html.matches("<span").count(), 1);
    }

    #[test]
    fn test_success_and_failure_badges() {
        let html = format_summary("SUCCESS then FAILURE");
        assert!(html.contains(">SUCCESS</span>"));
        assert!(html.contains(">FAILURE</span>"));
        assert!(html.contains("background-color:#16a34a"));
        assert!(html.contains("background-color:#dc2626"));
    }

    #[test]
    fn test_keyword_inside_a_word_still_matches() {
        // Matching is unanchored on purpose.
        let html = format_summary("BYPASSED");
        assert!(html.contains("BY<span"));
        assert!(html.contains(">PASSED</span>"));
    }

    #[test]
    fn test_model_markup_is_escaped() {
        let html = format_summary("<script>alert('x')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_card_wraps_formatted_summary() {
        let card = render_summary_card("STATUS : PASS");
        assert!(card.contains("Summary Report"));
        assert!(card.contains("<b>STATUS:</b>"));
        assert!(card.contains(">PASS</span>"));
        assert!(card.starts_with("<h3>"));
    }
}
