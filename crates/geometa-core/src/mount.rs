//! Mount records: where a monitoring mark's equipment was installed, and when.

use serde::{Deserialize, Serialize};

use crate::schema::{
    parse_float, parse_text, parse_time, render_float, render_text, render_time, Column, ListEntry,
};
use crate::types::{Point, Reference, Span, SpanEnd, Spanned};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mount {
    pub reference: Reference,
    pub point: Point,
    pub span: Span,
    pub description: String,
}

impl ListEntry for Mount {
    const KIND: &'static str = "mount";

    const COLUMNS: &'static [Column<Self>] = &[
        Column {
            name: "Mount Code",
            parse: |m: &mut Mount, s: &str| {
                m.reference.code = parse_text(s);
                Ok(())
            },
            render: |m: &Mount| render_text(&m.reference.code),
        },
        Column {
            name: "Mount Network",
            parse: |m: &mut Mount, s: &str| {
                m.reference.network = parse_text(s);
                Ok(())
            },
            render: |m: &Mount| render_text(&m.reference.network),
        },
        Column {
            name: "Mount Name",
            parse: |m: &mut Mount, s: &str| {
                m.reference.name = parse_text(s);
                Ok(())
            },
            render: |m: &Mount| render_text(&m.reference.name),
        },
        Column {
            name: "Latitude",
            parse: |m: &mut Mount, s: &str| {
                m.point.latitude = parse_float(s)?;
                Ok(())
            },
            render: |m: &Mount| render_float(m.point.latitude),
        },
        Column {
            name: "Longitude",
            parse: |m: &mut Mount, s: &str| {
                m.point.longitude = parse_float(s)?;
                Ok(())
            },
            render: |m: &Mount| render_float(m.point.longitude),
        },
        Column {
            name: "Elevation",
            parse: |m: &mut Mount, s: &str| {
                m.point.elevation = parse_float(s)?;
                Ok(())
            },
            render: |m: &Mount| render_float(m.point.elevation),
        },
        Column {
            name: "Datum",
            parse: |m: &mut Mount, s: &str| {
                m.point.datum = parse_text(s);
                Ok(())
            },
            render: |m: &Mount| render_text(&m.point.datum),
        },
        Column {
            name: "Description",
            parse: |m: &mut Mount, s: &str| {
                m.description = parse_text(s);
                Ok(())
            },
            render: |m: &Mount| render_text(&m.description),
        },
        Column {
            name: "Start Time",
            parse: |m: &mut Mount, s: &str| {
                m.span.start = parse_time(s)?;
                Ok(())
            },
            render: |m: &Mount| render_time(&m.span.start),
        },
        Column {
            name: "End Time",
            parse: |m: &mut Mount, s: &str| {
                m.span.end = SpanEnd::from(parse_time(s)?);
                Ok(())
            },
            render: |m: &Mount| render_time(&m.span.end_time()),
        },
    ];

    fn code(&self) -> &str {
        &self.reference.code
    }
}

impl Spanned for Mount {
    fn span(&self) -> &Span {
        &self.span
    }
}
