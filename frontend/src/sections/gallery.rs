use std::rc::Rc;

use log::warn;
use maud::html;

use crate::error::RenderError;
use crate::model::GallerySection;
use crate::site::RenderContext;
use crate::surface::{Content, Target};

pub const KEY: &str = "gallery";

// Broken images take their whole tile with them.
const HIDE_ON_ERROR: &str = "this.parentElement.style.display='none'";

pub fn populate(ctx: &RenderContext, gallery: &GallerySection) -> Result<(), RenderError> {
    ctx.text(Target::GalleryTitle, &gallery.title)?;
    ctx.markup(
        Target::GalleryGrid,
        html! {
            @for image in &gallery.images {
                div class="gallery__item" {
                    img src=(image.src) alt=(image.alt) loading="lazy" onerror=(HIDE_ON_ERROR);
                    div class="gallery__overlay" {
                        p class="gallery__description" { (image.description) }
                    }
                }
            }
        },
    )?;

    for index in 0..gallery.images.len() {
        let surface = Rc::clone(&ctx.surface);
        let delay = ctx.settings.gallery_stagger * index as u32;
        ctx.scheduler.schedule(
            delay,
            Box::new(move || {
                let target = Target::GalleryItem(index);
                if let Err(e) = surface.borrow_mut().render(target, Content::AddClass("fade-in")) {
                    warn!("Gallery item {} could not fade in: {}", index, e);
                }
            }),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GalleryImage;
    use crate::test_helpers::context;
    use std::time::Duration;

    fn gallery(count: usize) -> GallerySection {
        GallerySection {
            title: "Gallery".into(),
            images: (0..count)
                .map(|i| GalleryImage {
                    src: format!("images/{}.jpg", i),
                    alt: format!("Pose {}", i),
                    description: format!("Class photo {}", i),
                })
                .collect(),
        }
    }

    #[test]
    fn renders_lazy_images_with_overlays() {
        let (ctx, surface, _) = context();
        populate(&ctx, &gallery(2)).unwrap();

        let surface = surface.borrow();
        let grid = surface.markup(Target::GalleryGrid).unwrap();
        assert_eq!(grid.matches("class=\"gallery__item\"").count(), 2);
        assert!(grid.contains(
            "<img src=\"images/1.jpg\" alt=\"Pose 1\" loading=\"lazy\" \
             onerror=\"this.parentElement.style.display='none'\">"
        ));
        assert!(grid.contains("<p class=\"gallery__description\">Class photo 0</p>"));
    }

    #[test]
    fn items_fade_in_one_after_another() {
        let (ctx, surface, scheduler) = context();
        populate(&ctx, &gallery(3)).unwrap();

        scheduler.advance(Duration::ZERO);
        assert!(surface.borrow().has_class(Target::GalleryItem(0), "fade-in"));
        assert!(!surface.borrow().has_class(Target::GalleryItem(1), "fade-in"));

        scheduler.advance(Duration::from_millis(100));
        assert!(surface.borrow().has_class(Target::GalleryItem(1), "fade-in"));
        assert!(!surface.borrow().has_class(Target::GalleryItem(2), "fade-in"));

        scheduler.advance(Duration::from_millis(100));
        assert!(surface.borrow().has_class(Target::GalleryItem(2), "fade-in"));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn rerendering_replaces_the_grid() {
        let (ctx, surface, _) = context();
        populate(&ctx, &gallery(2)).unwrap();
        let first = surface.borrow().markup(Target::GalleryGrid).map(str::to_owned);
        populate(&ctx, &gallery(2)).unwrap();
        assert_eq!(surface.borrow().markup(Target::GalleryGrid).map(str::to_owned), first);
    }
}
