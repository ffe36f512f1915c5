//! HTML pages for the tracker. Plain string building; the pages are small
//! and have no client-side behaviour beyond forms.

use scoreboard_core::models::Subject;
use scoreboard_core::tracker::TrackerView;
use std::fmt::Write;
use strum::IntoEnumIterator;

const DAYS: [(&str, &str); 5] = [
    ("mon", "Monday"),
    ("tue", "Tuesday"),
    ("wed", "Wednesday"),
    ("thu", "Thursday"),
    ("fri", "Friday"),
];

fn page(title: &str, body: &str) -> String {
    let title = escape(title);
    format!(
        "<!doctype html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>{title}</title>\n  </head>\n  <body>\n    <h1>{title}</h1>\n{body}  </body>\n</html>\n"
    )
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn form_page() -> String {
    let mut body = String::new();
    body.push_str("    <form method=\"post\" action=\"/add\">\n");
    body.push_str("      <label>Subject <select name=\"subject\">\n");
    for subject in Subject::iter() {
        let _ = writeln!(body, "        <option value=\"{0}\">{0}</option>", subject);
    }
    body.push_str("      </select></label>\n");
    for (field, label) in DAYS {
        let _ = writeln!(
            body,
            "      <label>{label} <input type=\"number\" name=\"{field}\" required></label>"
        );
    }
    body.push_str("      <button type=\"submit\">Save</button>\n    </form>\n");
    body.push_str("    <p><a href=\"/view\">View scores</a></p>\n");
    page("Weekly Scores", &body)
}

fn delete_button(action: &str, index: usize) -> String {
    format!(
        "<form method=\"post\" action=\"/{action}/{index}\"><button type=\"submit\">Delete</button></form>"
    )
}

pub fn view_page(view: &TrackerView) -> String {
    let mut body = String::new();

    body.push_str("    <h2>Scores</h2>\n    <table>\n");
    body.push_str(
        "      <tr><th>Week</th><th>Subject</th><th>Mon</th><th>Tue</th><th>Wed</th><th>Thu</th><th>Fri</th><th></th></tr>\n",
    );
    for (i, r) in view.scores.iter().enumerate() {
        let _ = writeln!(
            body,
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&r.week),
            r.subject,
            r.mon,
            r.tue,
            r.wed,
            r.thu,
            r.fri,
            delete_button("delete_raw", i)
        );
    }
    body.push_str("    </table>\n");

    body.push_str("    <h2>Weekly Averages</h2>\n    <table>\n");
    body.push_str("      <tr><th>Week</th>");
    for subject in Subject::iter() {
        let _ = write!(body, "<th>{}</th>", subject);
    }
    body.push_str("<th></th></tr>\n");
    for (i, a) in view.averages.iter().enumerate() {
        let _ = write!(body, "      <tr><td>{}</td>", escape(&a.week));
        for subject in Subject::iter() {
            let _ = write!(body, "<td>{}</td>", a.get(subject));
        }
        let _ = writeln!(body, "<td>{}</td></tr>", delete_button("delete_avg", i));
    }
    body.push_str("    </table>\n");

    body.push_str("    <p><a href=\"/\">Add scores</a></p>\n");
    page("Weekly Scores", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_core::models::{Average, AverageRecord, ScoreRecord};

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_form_lists_every_subject_and_day() {
        let html = form_page();
        for subject in ["Maths", "English", "VR", "NVR"] {
            assert!(html.contains(&format!("<option value=\"{}\">", subject)));
        }
        for day in ["mon", "tue", "wed", "thu", "fri"] {
            assert!(html.contains(&format!("name=\"{}\"", day)));
        }
    }

    #[test]
    fn test_view_has_delete_actions_by_position() {
        let mut avg = AverageRecord::empty("5");
        avg.maths_avg = Average::Value(80.0);
        let view = TrackerView {
            scores: vec![
                ScoreRecord::new("5", Subject::Maths, [60, 70, 80, 90, 100]),
                ScoreRecord::new("<5>", Subject::Nvr, [1, 1, 1, 1, 1]),
            ],
            averages: vec![avg],
        };

        let html = view_page(&view);
        assert!(html.contains("action=\"/delete_raw/0\""));
        assert!(html.contains("action=\"/delete_raw/1\""));
        assert!(html.contains("action=\"/delete_avg/0\""));
        assert!(!html.contains("/delete_avg/1"));
        assert!(html.contains("<td>80.0</td><td>not available</td>"));
        assert!(html.contains("&lt;5&gt;"));
    }
}
