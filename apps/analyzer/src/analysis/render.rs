/// Renders the raw report as an HTML fragment: escaped, newlines as `<br>`,
/// wrapped in the `report-container` div.
pub fn render_report_html(report: &str) -> String {
    let body = html_escape(report)
        .replace("\r\n", "\n")
        .replace('\n', "<br>");
    format!("<div class=\"report-container\">{body}</div>")
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
