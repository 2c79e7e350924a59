use report_viewer::bootstrap::parse_injected_report;

use super::*;

fn extract_payload(page: &str) -> Option<&str> {
    let open = format!(r#"<script id="{REPORT_DATA_ELEMENT_ID}" type="application/json">"#);
    let start = page.find(&open)? + open.len();
    let end = page[start..].find("</script>")? + start;
    Some(&page[start..end])
}

#[test]
fn page_without_report_has_mount_point_and_no_payload() {
    let page = render_host_page(None).unwrap();
    assert!(page.contains(r#"<div id="root"></div>"#));
    assert!(!page.contains(REPORT_DATA_ELEMENT_ID));
    assert!(page.contains("<title>Test Report</title>"));
    assert!(page.contains("/pkg/report-viewer.js"));
}

#[test]
fn page_with_report_embeds_payload_the_viewer_can_parse() {
    let report = ReportData { title: "Nightly".to_owned(), ..ReportData::default() };
    let page = render_host_page(Some(&report)).unwrap();

    assert!(page.contains("<title>Nightly</title>"));
    let payload = extract_payload(&page).unwrap();
    let parsed = parse_injected_report(Some(payload)).unwrap().unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn payload_cannot_close_its_script_element() {
    let report = ReportData { title: "</script><script>alert(1)</script>".to_owned(), ..ReportData::default() };
    let page = render_host_page(Some(&report)).unwrap();

    let payload = extract_payload(&page).unwrap();
    assert!(!payload.contains('<'));
    let parsed = parse_injected_report(Some(payload)).unwrap().unwrap();
    assert_eq!(parsed.title, report.title);
    assert!(page.contains("<title>&lt;/script&gt;&lt;script&gt;alert(1)&lt;/script&gt;</title>"));
}

#[test]
fn escape_html_covers_markup_characters() {
    assert_eq!(escape_html(r#"a & <b> "c" 'd'"#), "a &amp; &lt;b&gt; &quot;c&quot; &#39;d&#39;");
}
