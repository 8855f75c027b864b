use maud::PreEscaped;

use crate::error::RenderError;
use crate::model::HeroSection;
use crate::site::RenderContext;
use crate::surface::{Content, Target};

pub const KEY: &str = "hero";

pub fn populate(ctx: &RenderContext, hero: &HeroSection) -> Result<(), RenderError> {
    ctx.text(Target::HeroTitle, &hero.title)?;
    ctx.text(Target::HeroSubtitle, &hero.subtitle)?;
    ctx.markup(Target::HeroQuote, PreEscaped(hero.quote.clone()))?;
    ctx.render(
        Target::Hero,
        Content::Style {
            property: "background-image",
            value: background(ctx.settings.hero_overlay, &hero.background_image),
        },
    )?;
    Ok(())
}

fn background(overlay: &str, image: &str) -> String {
    format!("{}, url('{}')", overlay, image.replace('\'', "%27"))
}
