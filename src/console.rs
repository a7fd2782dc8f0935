use lazy_static::lazy_static;
use owo_colors::{OwoColorize, Style};

lazy_static! {
    static ref DEFAULT_LINE_STYLE: Style = Style::new().bright_black();
    static ref DEFAULT_HEADER_STYLE: Style = Style::new().cyan().bold();
}

const LINE_CHAR: char = '=';
const DEFAULT_WIDTH: usize = 50;
const HEADER_MARGIN: usize = 2;

/// Print a full-width horizontal rule.
pub fn horizontal_line(width: Option<usize>, style: Option<Style>) {
    let width = width.unwrap_or(DEFAULT_WIDTH);
    let style = style.unwrap_or(*DEFAULT_LINE_STYLE);

    println!("{}", LINE_CHAR.to_string().repeat(width).style(style));
}

/// Print a horizontal rule with a centred header, e.g.
/// `====  Configuration  ====`.
///
/// A header wider than `total_width` is printed bare, without rule segments.
pub fn horizontal_line_with_text(
    header: &str,
    header_style: Option<Style>,
    total_width: Option<usize>,
    line_style: Option<Style>,
) {
    let header_style = header_style.unwrap_or(*DEFAULT_HEADER_STYLE);
    let line_style = line_style.unwrap_or(*DEFAULT_LINE_STYLE);
    let total_width = total_width.unwrap_or(DEFAULT_WIDTH);

    if header.len() >= total_width {
        println!("{}", header.style(header_style));
        return;
    }

    let line_width_per_side = total_width
        .saturating_sub(header.len())
        .saturating_sub(2 * HEADER_MARGIN)
        / 2;
    let line_segment = LINE_CHAR.to_string().repeat(line_width_per_side);
    let margin = " ".repeat(HEADER_MARGIN);

    println!(
        "{}{}{}{}{}",
        line_segment.style(line_style),
        margin,
        header.style(header_style),
        margin,
        line_segment.style(line_style)
    );
}

#[inline(always)]
pub fn new_line() {
    println!();
}
