use pdf_rows::layout::{Alignment, Row};
use pdf_rows::{Document, FontStyle, Info, Orientation, PageSize, Unit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::new(Orientation::Portrait, Unit::Mm, PageSize::A4, ".");
    doc.set_info(
        Info::new()
            .with_title("Quarterly headcount")
            .with_author("pdf-rows"),
    );
    doc.set_margins(15.0, 15.0, 15.0);
    doc.add_page();

    // header band: bold, centred titles on a grey background
    let mut header = Row::new(60.0, 5.0);
    header.cell_margin = 2.0;
    header.draw_border = true;
    header.background = [220, 220, 220].into();
    header.title.font_size = 12.0;
    header.title.font_style = FontStyle::BOLD;
    header.title.align = "C".parse::<Alignment>()?;
    header.render(
        &mut doc,
        15.0,
        20.0,
        &["Engineering", "Design", "Operations"],
        &["", "", ""],
        &["", "", ""],
    )?;

    // one band per office, stacking location, lead, and a blurb
    let mut band = Row::new(60.0, 5.0);
    band.cell_margin = 2.0;
    band.draw_border = true;
    band.background = [255, 255, 255].into();
    band.title.font_size = 11.0;
    band.title.font_style = FontStyle::BOLD;
    band.subtitle.font_size = 9.0;
    band.subtitle.font_style = FontStyle::ITALIC;
    band.text.font_size = 9.0;

    let (_, y) = doc.cursor();
    band.render(
        &mut doc,
        15.0,
        y,
        &["Berlin", "Lisbon", "Toronto"],
        &["lead: R. Okafor", "lead: M. Duarte", "lead: S. Chen"],
        &[
            "Platform and infrastructure. Hiring for two backend roles this quarter.",
            "Brand and product design studio.",
            "Customer operations and support, around the clock coverage.",
        ],
    )?;

    let out = std::fs::File::create("report.pdf")?;
    doc.write(out)?;
    println!("wrote report.pdf");
    Ok(())
}
