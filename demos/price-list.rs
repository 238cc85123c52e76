use pdf_rows::layout::{Alignment, Row};
use pdf_rows::{Document, FontStyle, Orientation, PageSize, Unit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::new(Orientation::Landscape, Unit::Mm, PageSize::Letter, ".");
    doc.add_page();

    let mut row = Row::new(80.0, 5.0);
    row.cell_margin = 3.0;
    row.draw_border = true;
    row.background = [245, 245, 235].into();
    row.trailing_break = 3.0;
    row.title.font_size = 13.0;
    row.title.font_style = FontStyle::BOLD;
    row.subtitle.font_size = 10.0;
    row.subtitle.align = "R".parse::<Alignment>()?;
    row.text.font_size = 9.0;

    let names = ["Standard", "Professional", "Enterprise"];
    let prices = ["$9 / month", "$29 / month", "contact us"];
    let blurbs = [
        lipsum::lipsum(12),
        lipsum::lipsum(18),
        lipsum::lipsum(15),
    ];

    let (_, y) = doc.cursor();
    row.render(
        &mut doc,
        20.0,
        y,
        &names,
        &prices,
        &[blurbs[0].as_str(), blurbs[1].as_str(), blurbs[2].as_str()],
    )?;

    let out = std::fs::File::create("price-list.pdf")?;
    doc.write(out)?;
    println!("wrote price-list.pdf");
    Ok(())
}
