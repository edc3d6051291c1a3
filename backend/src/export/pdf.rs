use crate::error::ExportError;
use common::model::report::ReportSection;
use genpdf::elements::{Break, FrameCellDecorator, PageBreak, Paragraph, TableLayout};
use genpdf::style::{Style, StyledString};
use genpdf::{Document, Element};
use std::path::Path;

const BODY_FONT_SIZE: u8 = 10;
const SECTION_FONT_SIZE: u8 = 14;
const TITLE_FONT_SIZE: u8 = 18;
const CELL_PADDING_MM: i32 = 1;

/// Load the font family from `fonts_dir`. Arial is preferred, LiberationSans
/// is the fallback shipped next to it.
fn load_font(
    fonts_dir: &Path,
) -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>, ExportError> {
    if let Ok(family) = genpdf::fonts::from_files(fonts_dir, "Arial", None) {
        return Ok(family);
    }
    genpdf::fonts::from_files(fonts_dir, "LiberationSans", None).map_err(ExportError::Font)
}

/// Configure and return a genpdf Document with font, title and margins set.
fn configure_document(fonts_dir: &Path, title: &str) -> Result<Document, ExportError> {
    let font_family = load_font(fonts_dir)?;
    let mut doc = Document::new(font_family);
    doc.set_title(title);
    doc.set_font_size(BODY_FONT_SIZE);
    doc.set_line_spacing(1.2);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(14);
    doc.set_page_decorator(decorator);
    Ok(doc)
}

fn cell(text: &str, style: Style) -> impl Element {
    Paragraph::new(StyledString::new(text.to_string(), style)).padded(CELL_PADDING_MM)
}

/// Lays out one section as a heading followed by a framed table.
fn push_section(doc: &mut Document, section: &ReportSection) -> Result<(), ExportError> {
    doc.push(Paragraph::new(StyledString::new(
        section.title.clone(),
        Style::new().bold().with_font_size(SECTION_FONT_SIZE),
    )));
    doc.push(Break::new(1));

    let mut table = TableLayout::new(vec![1; section.header_row.len().max(1)]);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let mut header = table.row();
    for title in &section.header_row {
        header.push_element(cell(title, Style::new().bold()));
    }
    header.push().map_err(ExportError::Render)?;

    for body_row in &section.body_rows {
        let mut row = table.row();
        for value in body_row {
            row.push_element(cell(value, Style::new()));
        }
        row.push().map_err(ExportError::Render)?;
    }

    doc.push(table);
    Ok(())
}

/// Renders `sections` into PDF bytes, one section per page after the title.
pub fn render_report(
    fonts_dir: &Path,
    title: &str,
    generated_on: &str,
    sections: &[ReportSection],
) -> Result<Vec<u8>, ExportError> {
    let mut doc = configure_document(fonts_dir, title)?;

    doc.push(Paragraph::new(StyledString::new(
        title.to_string(),
        Style::new().bold().with_font_size(TITLE_FONT_SIZE),
    )));
    doc.push(Paragraph::new(format!("Generated on: {}", generated_on)));
    doc.push(Break::new(2));

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            doc.push(PageBreak::new());
        }
        push_section(&mut doc, section)?;
    }

    let mut bytes: Vec<u8> = Vec::new();
    doc.render(&mut bytes).map_err(ExportError::Render)?;
    Ok(bytes)
}
