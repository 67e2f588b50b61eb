// Example: a synthetic text-row measurer driving the resolver.
//
// A real adapter would lay out an offscreen cell/widget at the list's width; here the
// "template" just wraps a string into 24-column lines to make measurement observable.
use rowheight::{Height, IndexPath};
use rowheight_adapter::{HeightResolver, TemplateMeasurer};

const COLUMNS: usize = 24;
const LINE_HEIGHT: Height = 18.0;

struct WrapMeasurer;

struct WrapTemplate {
    text: String,
}

impl TemplateMeasurer for WrapMeasurer {
    type Template = WrapTemplate;
    type Error = std::convert::Infallible;

    fn create_template(&mut self, identifier: &str) -> Result<WrapTemplate, Self::Error> {
        println!("creating template for `{identifier}`");
        Ok(WrapTemplate {
            text: String::new(),
        })
    }

    fn measure(&mut self, template: &mut WrapTemplate) -> Result<Height, Self::Error> {
        let lines = template.text.len().div_ceil(COLUMNS).max(1);
        println!("measuring ({} chars -> {lines} lines)", template.text.len());
        Ok(lines as Height * LINE_HEIGHT)
    }
}

fn main() {
    let rows = [
        "short",
        "a row whose text wraps onto a couple of lines at this width",
        "medium length content",
    ];

    let mut resolver: HeightResolver<WrapMeasurer, u64> = HeightResolver::new(WrapMeasurer);

    // First pass measures; the second is answered from the cache without touching templates.
    for pass in 0..2 {
        println!("pass {pass}:");
        for (row, text) in rows.iter().enumerate() {
            let height = resolver
                .height_for_index_path("text-row", IndexPath::new(0, row), |template| {
                    template.text = String::from(*text)
                })
                .unwrap();
            println!("  row {row}: {height}");
        }
    }
}
