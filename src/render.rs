use crate::graph::GraphModel;
use crate::layout::Placement;

const EMPTY: &str = ".";

/// Draws the placement as rows of node ids, free cells shown as `.`.
pub fn render_grid(graph: &GraphModel, placement: &Placement) -> String {
    let grid = placement.grid();
    let slots = placement.slots_by_cell();

    let labels: Vec<String> = slots
        .iter()
        .map(|&slot| match graph.node_id(slot) {
            Some(id) if !placement.is_padding(slot) => id.to_string(),
            _ => EMPTY.to_string(),
        })
        .collect();
    let column_width = labels.iter().map(String::len).max().unwrap_or(1);

    let mut out = String::new();
    for row in labels.chunks(grid.width()) {
        let line: Vec<String> = row
            .iter()
            .map(|label| format!("{:>width$}", label, width = column_width))
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
