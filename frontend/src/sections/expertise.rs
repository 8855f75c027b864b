use maud::html;

use crate::error::RenderError;
use crate::model::ItemsSection;
use crate::site::RenderContext;
use crate::surface::Target;

pub const KEY: &str = "expertise";

pub fn populate(ctx: &RenderContext, expertise: &ItemsSection) -> Result<(), RenderError> {
    ctx.text(Target::ExpertiseTitle, &expertise.title)?;
    ctx.markup(
        Target::ExpertiseList,
        html! {
            @for item in &expertise.items {
                div class="expertise__item" {
                    h3 { (item.title) }
                    p { (item.description) }
                }
            }
        },
    )?;
    Ok(())
}
