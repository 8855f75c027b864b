use maud::html;

use crate::error::RenderError;
use crate::model::AboutSection;
use crate::site::RenderContext;
use crate::surface::Target;

pub const KEY: &str = "about";

pub fn populate(ctx: &RenderContext, about: &AboutSection) -> Result<(), RenderError> {
    ctx.text(Target::AboutTitle, &about.title)?;
    ctx.text(Target::AboutIntro, &about.intro)?;

    ctx.markup(
        Target::AboutCards,
        html! {
            @for card in &about.cards {
                div class="about__card" {
                    h3 class="about__card-title" { (card.title) }
                    p { (card.content) }
                }
            }
        },
    )?;

    ctx.markup(
        Target::AboutHighlights,
        html! {
            @for highlight in &about.highlights {
                div class="about__highlight" {
                    span class="about__highlight-number" { (highlight.number.to_string()) }
                    span class="about__highlight-text" { (highlight.text) }
                }
            }
        },
    )?;
    Ok(())
}
