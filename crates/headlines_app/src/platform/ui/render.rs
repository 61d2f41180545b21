use headlines_core::{ArticleRowView, Footer, ImageRef, ListViewModel, RenderMode, Viewport};

/// Renders the view model into terminal lines, showing only rows inside `viewport`.
pub fn render(view: &ListViewModel, viewport: Viewport) -> Vec<String> {
    match view.mode {
        RenderMode::InitialLoading => vec!["Loading headlines...".to_string()],
        RenderMode::ErrorEmpty => vec![
            "No connection.".to_string(),
            "[t] Retry".to_string(),
        ],
        RenderMode::Empty => vec!["No headlines.".to_string()],
        RenderMode::Populated { footer } => render_list(view, viewport, footer),
    }
}

fn render_list(view: &ListViewModel, viewport: Viewport, footer: Footer) -> Vec<String> {
    let total = view
        .total_results
        .map_or_else(|| "?".to_string(), |total| total.to_string());
    let mut header = format!("Top headlines: {} of {}", view.rows.len(), total);
    if view.is_refreshing {
        header.push_str(" (refreshing)");
    }

    let mut lines = vec![header];
    let end = viewport.end().min(view.rows.len());
    let start = viewport.first.min(end);
    for (index, row) in view.rows[start..end].iter().enumerate() {
        lines.extend(render_row(start + index + 1, row));
    }
    lines.push(match footer {
        Footer::Spinner => "  ... loading more".to_string(),
        Footer::Spacer => String::new(),
    });
    lines
}

fn render_row(number: usize, row: &ArticleRowView) -> [String; 2] {
    let image = match row.image {
        ImageRef::Remote(_) => "[img]",
        ImageRef::Placeholder => "[no image]",
    };
    [
        format!("{number:>3}. {}", row.title),
        format!("     From: {} {image}", row.source_label),
    ]
}
