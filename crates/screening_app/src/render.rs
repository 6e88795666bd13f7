use screening_core::{FormViewModel, ResultRowView};

const HEADERS: [&str; 5] = ["Rank", "Filename", "Score", "Match", "Matched Skills"];

/// Plain-text ranking table, one row per result in service order.
pub fn render_results(view: &FormViewModel) -> String {
    if view.results.is_empty() {
        return "No resumes were ranked.\n".to_string();
    }

    let rows: Vec<[String; 5]> = view.results.iter().map(format_row).collect();
    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn format_row(row: &ResultRowView) -> [String; 5] {
    [
        row.rank.to_string(),
        row.filename.clone(),
        row.score_label.clone(),
        if row.is_good_match { "good" } else { "weak" }.to_string(),
        row.skills_label.clone(),
    ]
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let last = cells.len() - 1;
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i == last {
            out.push_str(cell);
        } else {
            out.push_str(cell);
            let pad = width - cell.chars().count() + 2;
            out.extend(std::iter::repeat(' ').take(pad));
        }
    }
    out.push('\n');
}
