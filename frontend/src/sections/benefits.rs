use maud::html;

use crate::error::RenderError;
use crate::model::ItemsSection;
use crate::site::RenderContext;
use crate::surface::Target;

pub const KEY: &str = "benefits";

pub fn populate(ctx: &RenderContext, benefits: &ItemsSection) -> Result<(), RenderError> {
    ctx.text(Target::BenefitsTitle, &benefits.title)?;
    ctx.markup(
        Target::BenefitsGrid,
        html! {
            @for item in &benefits.items {
                div class="benefit" {
                    h3 { (item.title) }
                    p { (item.description) }
                }
            }
        },
    )?;
    Ok(())
}
