use maud::html;

use crate::error::RenderError;
use crate::model::ContactSection;
use crate::site::RenderContext;
use crate::surface::Target;

pub const KEY: &str = "contact";

pub fn populate(ctx: &RenderContext, contact: &ContactSection) -> Result<(), RenderError> {
    ctx.text(Target::ContactTitle, &contact.title)?;
    ctx.text(Target::ContactDescription, &contact.description)?;

    ctx.markup(
        Target::ContactMethods,
        html! {
            a href={ "tel:" (contact.phone) } class="contact__method" {
                span { "📞" } " " (contact.phone)
            }
            a href={ "mailto:" (contact.email) } class="contact__method" {
                span { "✉️" } " " (contact.email)
            }
            a href=(whatsapp_link(contact)) target="_blank" class="contact__method contact__method--whatsapp" {
                span { "💬" } " WhatsApp"
            }
        },
    )?;

    ctx.markup(
        Target::ContactActions,
        html! {
            a href=(mailto(&contact.email, &contact.booking_subject)) class="btn btn--primary" { "Book Session" }
            a href=(mailto(&contact.email, &contact.inquiry_subject)) class="btn btn--secondary" { "Send Query" }
        },
    )?;
    Ok(())
}

fn whatsapp_link(contact: &ContactSection) -> String {
    format!(
        "https://wa.me/{}?text={}",
        contact.whatsapp.number,
        urlencoding::encode(&contact.whatsapp.message)
    )
}

fn mailto(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WhatsApp;
    use crate::test_helpers::context;

    fn contact() -> ContactSection {
        ContactSection {
            title: "Get in touch".into(),
            description: "Book a class".into(),
            phone: "+91 98765 43210".into(),
            email: "hello@example.com".into(),
            whatsapp: WhatsApp {
                number: "919876543210".into(),
                message: "Hi! I'd like to join a class".into(),
            },
            booking_subject: "Yoga Session Booking".into(),
            inquiry_subject: "Yoga Inquiry".into(),
        }
    }

    #[test]
    fn whatsapp_message_is_url_encoded() {
        assert_eq!(
            whatsapp_link(&contact()),
            "https://wa.me/919876543210?text=Hi%21%20I%27d%20like%20to%20join%20a%20class"
        );
    }

    #[test]
    fn actions_carry_subjects() {
        let (ctx, surface, _) = context();
        populate(&ctx, &contact()).unwrap();

        let surface = surface.borrow();
        assert_eq!(surface.text(Target::ContactDescription), Some("Book a class"));
        let methods = surface.markup(Target::ContactMethods).unwrap();
        assert!(methods.contains("href=\"tel:+91 98765 43210\""));
        assert!(methods.contains("href=\"mailto:hello@example.com\""));
        let actions = surface.markup(Target::ContactActions).unwrap();
        assert!(actions.contains("mailto:hello@example.com?subject=Yoga%20Session%20Booking"));
        assert!(actions.contains("mailto:hello@example.com?subject=Yoga%20Inquiry"));
    }
}
