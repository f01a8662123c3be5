use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::graph::{GraphModel, NodeId};
use crate::layout::Placement;

pub const HEADER: &str = "id,x,y";

/// Writes one `id,x,y` row per node in compact index order.
pub fn write_coordinates<W: Write>(mut writer: W, graph: &GraphModel, placement: &Placement) -> Result<()> {
    writeln!(writer, "{}", HEADER)?;
    for (index, id) in graph.node_ids().enumerate() {
        let point = placement.point(index);
        writeln!(writer, "{},{},{}", id, point.x, point.y)?;
    }
    writer.flush()?;
    Ok(())
}

/// Parses a file produced by [`write_coordinates`].
pub fn read_coordinates<R: BufRead>(reader: R) -> Result<Vec<(NodeId, Point)>> {
    let mut rows = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if lineno == 0 && line == HEADER {
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let malformed = || Error::MalformedCoordinates { line: lineno + 1 };
        let mut fields = line.split(',');
        let id = fields.next().and_then(|field| field.trim().parse::<NodeId>().ok());
        let x = fields.next().and_then(|field| field.trim().parse::<i32>().ok());
        let y = fields.next().and_then(|field| field.trim().parse::<i32>().ok());
        match (id, x, y, fields.next()) {
            (Some(id), Some(x), Some(y), None) => rows.push((id, Point::new(x, y))),
            _ => return Err(malformed()),
        }
    }
    Ok(rows)
}
