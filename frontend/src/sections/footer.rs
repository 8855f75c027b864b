use chrono::Datelike;
use maud::html;

use crate::error::RenderError;
use crate::model::FooterSection;
use crate::site::RenderContext;
use crate::surface::Target;

pub const KEY: &str = "footer";

pub fn populate(ctx: &RenderContext, footer: &FooterSection) -> Result<(), RenderError> {
    let year = ctx.now.year();
    ctx.markup(
        Target::FooterText,
        html! {
            "© " (year) " " (footer.owner) ". All rights reserved."
            @if let Some(credit) = &footer.credit {
                " | Built by "
                a href=(credit.url) target="_blank" { (credit.name) }
            }
        },
    )?;
    Ok(())
}
