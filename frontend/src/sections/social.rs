use maud::html;

use crate::error::RenderError;
use crate::model::SocialSection;
use crate::site::RenderContext;
use crate::surface::Target;

pub const KEY: &str = "social";

pub fn populate(ctx: &RenderContext, social: &SocialSection) -> Result<(), RenderError> {
    let instagram = &social.instagram;
    ctx.text(Target::SocialTitle, &social.title)?;
    ctx.markup(
        Target::SocialContent,
        html! {
            p class="social__description" { (instagram.description) }
            div class="social__instagram" {
                div class="social__handle" { (instagram.handle) }
                a href=(instagram.url) target="_blank" class="social__cta" {
                    "Follow us on Instagram"
                }
            }
        },
    )?;
    Ok(())
}
