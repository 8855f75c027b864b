use maud::html;

use crate::error::RenderError;
use crate::model::ItemsSection;
use crate::site::RenderContext;
use crate::surface::Target;

pub const KEY: &str = "services";

pub fn populate(ctx: &RenderContext, services: &ItemsSection) -> Result<(), RenderError> {
    ctx.text(Target::ServicesTitle, &services.title)?;
    ctx.markup(
        Target::ServicesGrid,
        html! {
            @for item in &services.items {
                article class="service" {
                    h3 class="service__title" { (item.title) }
                    p class="service__description" { (item.description) }
                }
            }
        },
    )?;
    Ok(())
}
