use maud::html;

use crate::error::RenderError;
use crate::model::{Label, TestimonialsSection};
use crate::site::RenderContext;
use crate::surface::Target;

pub const KEY: &str = "testimonials";

pub fn populate(ctx: &RenderContext, testimonials: &TestimonialsSection) -> Result<(), RenderError> {
    ctx.text(Target::TestimonialsTitle, &testimonials.title)?;
    ctx.markup(
        Target::TestimonialsGrid,
        html! {
            @for item in &testimonials.items {
                div class="testimonial" {
                    p class="testimonial__text" { "\"" (item.text) "\"" }
                    div class="testimonial__author" { (item.name) }
                    div class="testimonial__rating" { (stars(&item.rating)) }
                }
            }
        },
    )?;
    Ok(())
}

pub const MAX_STARS: usize = 5;

/// Whole stars for a rating, floored and capped at [`MAX_STARS`]. Anything
/// that isn't a number shows no stars.
fn stars(rating: &Label) -> String {
    let count = rating
        .as_f64()
        .filter(|r| r.is_finite())
        .map_or(0, |r| r.floor().clamp(0.0, MAX_STARS as f64) as usize);
    "★".repeat(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Testimonial;
    use crate::test_helpers::context;
    use serde_json::json;

    fn rating(value: serde_json::Value) -> Label {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn rating_becomes_stars() {
        assert_eq!(stars(&rating(json!(0))), "");
        assert_eq!(stars(&rating(json!(4))), "★★★★");
        assert_eq!(stars(&rating(json!(4.5))), "★★★★");
        assert_eq!(stars(&rating(json!("3"))), "★★★");
    }

    #[test]
    fn odd_ratings_are_bounded() {
        assert_eq!(stars(&rating(json!(-2))), "");
        assert_eq!(stars(&rating(json!(12))), "★★★★★");
        assert_eq!(stars(&rating(json!("great"))), "");
    }

    #[test]
    fn fractional_rating_keeps_the_section() {
        let section: TestimonialsSection = serde_json::from_value(json!({
            "title": "Kind words",
            "items": [
                { "text": "Lovely", "name": "Asha", "rating": 4.5 },
                { "text": "Calm", "name": "Tom", "rating": 5 }
            ]
        }))
        .unwrap();
        let (ctx, surface, _) = context();
        populate(&ctx, &section).unwrap();

        let surface = surface.borrow();
        let grid = surface.markup(Target::TestimonialsGrid).unwrap();
        assert!(grid.contains("<div class=\"testimonial__rating\">★★★★</div>"));
        assert!(grid.contains("<div class=\"testimonial__rating\">★★★★★</div>"));
    }

    #[test]
    fn text_is_quoted() {
        let testimonials = TestimonialsSection {
            title: "Kind words".into(),
            items: vec![Testimonial {
                text: "Life changing".into(),
                name: "Asha".into(),
                rating: Label::Number(5.into()),
            }],
        };
        let (ctx, surface, _) = context();
        populate(&ctx, &testimonials).unwrap();

        let surface = surface.borrow();
        let grid = surface.markup(Target::TestimonialsGrid).unwrap();
        assert!(grid.contains("Life changing"));
        assert!(grid.contains("<div class=\"testimonial__author\">Asha</div>"));
        assert!(grid.contains("<div class=\"testimonial__rating\">★★★★★</div>"));
    }
}
