//! Vista del modal de cotización: panel del vehículo + formulario, o la
//! confirmación final una vez enviado.

use crate::models::quote::{QuoteFlow, QuoteState};
use crate::views::{html_escape, page_html};

pub const CONSENT_TEXT: &str = "I agree to receive calls, texts, and emails regarding this vehicle. \
Standard messaging rates may apply.";

/// `notice` es un aviso de esta respuesta (p. ej. formulario incompleto);
/// los fallos de envío vienen en `flow.last_error`.
pub fn quote_html(flow: &QuoteFlow, notice: Option<&str>) -> String {
    let inner = match flow.state {
        QuoteState::Submitted => confirmation_html(flow),
        QuoteState::Collecting | QuoteState::Submitting => {
            format!("{}{}", vehicle_panel_html(flow), form_html(flow, notice))
        }
    };

    let body = format!(
        r#"<div class="modal">
  <form class="close" method="post" action="/quotes/{id}/close">
    <button type="submit" class="secondary" aria-label="Close modal">&times;</button>
  </form>
{inner}
</div>"#,
        id = flow.id,
        inner = inner
    );

    page_html(&format!("Get Today's Price - {}", flow.vehicle.title()), &body)
}

fn confirmation_html(flow: &QuoteFlow) -> String {
    format!(
        r#"  <div class="done">
    <h2>Request Submitted!</h2>
    <p class="muted">We&#39;ll get back to you with today&#39;s best price shortly.</p>
    <form method="post" action="/quotes/{}/close">
      <button type="submit">Close</button>
    </form>
  </div>
"#,
        flow.id
    )
}

fn vehicle_panel_html(flow: &QuoteFlow) -> String {
    let vehicle = &flow.vehicle;
    format!(
        r#"  <div class="vehicle">
    <img src="{image}" alt="{title}">
    <h3>{title}</h3>
    <p class="accent">{trim}</p>
    <dl>
      <dt>Color</dt><dd>{color}</dd>
      <dt>Mileage</dt><dd>{mileage}</dd>
      <dt>Fuel Type</dt><dd>{fuel}</dd>
    </dl>
    <p class="tiny">Stock # {stock}</p>
    <p class="tiny">VIN <code>{vin}</code></p>
  </div>
"#,
        image = html_escape(vehicle.image_or_placeholder()),
        title = html_escape(&vehicle.title()),
        trim = html_escape(&vehicle.trim),
        color = html_escape(&vehicle.color),
        mileage = html_escape(&vehicle.mileage),
        fuel = html_escape(&vehicle.fuel_type),
        stock = html_escape(&vehicle.stock_number),
        vin = html_escape(&vehicle.vin),
    )
}

fn banner_html(flow: &QuoteFlow, notice: Option<&str>) -> String {
    let mut banners = String::new();
    if let Some(error) = &flow.last_error {
        banners.push_str(&format!(
            r#"    <div class="banner" role="alert">
      <span>We couldn&#39;t send your request: {}</span>
      <form method="post" action="/quotes/{}/dismiss"><button type="submit" class="secondary">Dismiss</button></form>
    </div>
"#,
            html_escape(error),
            flow.id
        ));
    }
    if let Some(notice) = notice {
        banners.push_str(&format!(
            "    <div class=\"banner\" role=\"alert\"><span>{}</span></div>\n",
            html_escape(notice)
        ));
    }
    banners
}

fn form_html(flow: &QuoteFlow, notice: Option<&str>) -> String {
    let contact = &flow.contact;
    // Con JavaScript deshabilitado, `required` hace de botón deshabilitado
    let disabled = if flow.state == QuoteState::Collecting { "" } else { " disabled" };
    let checked = if contact.consent { " checked" } else { "" };
    let label = if flow.state == QuoteState::Submitting {
        "Submitting..."
    } else {
        "Get Today&#39;s Price &rarr;"
    };

    format!(
        r#"  <div class="form">
    <p class="accent">Limited Time Offer</p>
    <h2>Get Today&#39;s Price</h2>
    <p class="muted">Enter your details to receive our best internet price</p>
    <p class="estimate" data-amount="{amount}">{estimate}</p>
{banners}    <form method="post" action="/quotes/{id}/submit">
      <label for="firstName">First Name *</label>
      <input type="text" id="firstName" name="firstName" value="{first}" placeholder="John" required>
      <label for="lastName">Last Name *</label>
      <input type="text" id="lastName" name="lastName" value="{last}" placeholder="Doe" required>
      <label for="email">Email *</label>
      <input type="email" id="email" name="email" value="{email}" placeholder="john@example.com" required>
      <label for="phone">Phone *</label>
      <input type="tel" id="phone" name="phone" value="{phone}" placeholder="(555) 123-4567" required>
      <label for="comments">Comments</label>
      <textarea id="comments" name="comments" rows="3" placeholder="Any questions or specific requests?">{comments}</textarea>
      <label class="consent">
        <input type="checkbox" id="consent" name="consent" value="on"{checked} required>
        <span>{consent_text}</span>
      </label>
      <button type="submit" class="submit"{disabled}>{label}</button>
    </form>
  </div>
"#,
        amount = flow.estimate.amount,
        estimate = html_escape(&flow.estimate.display),
        banners = banner_html(flow, notice),
        id = flow.id,
        first = html_escape(&contact.first_name),
        last = html_escape(&contact.last_name),
        email = html_escape(&contact.email),
        phone = html_escape(&contact.phone),
        comments = html_escape(&contact.comments),
        checked = checked,
        consent_text = html_escape(CONSENT_TEXT),
        disabled = disabled,
        label = label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::ContactUpdate;
    use crate::repositories::inventory_repository::InventoryRepository;
    use crate::services::price_estimator::{estimate, FixedAdjustment};

    fn civic_flow() -> QuoteFlow {
        let inventory = InventoryRepository::seeded().unwrap();
        let civic = inventory.find("HC2234B").unwrap().clone();
        let estimate = estimate(&civic, &FixedAdjustment(0));
        QuoteFlow::open(civic, estimate)
    }

    #[test]
    fn test_collecting_shows_vehicle_and_form() {
        let flow = civic_flow();
        let html = quote_html(&flow, None);

        assert!(html.contains("2023 Honda Civic"));
        assert!(html.contains("2HGFE2F59PH543210"));
        assert!(html.contains("$14,500"));
        assert!(html.contains(&format!("action=\"/quotes/{}/submit\"", flow.id)));
        assert!(!html.contains("Request Submitted!"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_submitted_offers_only_close() {
        let mut flow = civic_flow();
        flow.update_contact(ContactUpdate {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("john@example.com".to_string()),
            phone: Some("5551234567".to_string()),
            comments: None,
            consent: Some(true),
        })
        .unwrap();
        flow.begin_submit().unwrap();
        flow.complete_submit();

        let html = quote_html(&flow, None);
        assert!(html.contains("Request Submitted!"));
        assert!(!html.contains("/submit\""));
        assert!(html.contains(&format!("/quotes/{}/close", flow.id)));
    }

    #[test]
    fn test_failure_banner_is_dismissible() {
        let mut flow = civic_flow();
        flow.fail_submit("Lead endpoint responded with status 502".to_string());

        let html = quote_html(&flow, None);
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("status 502"));
        assert!(html.contains(&format!("/quotes/{}/dismiss", flow.id)));
    }

    #[test]
    fn test_contact_values_are_escaped() {
        let mut flow = civic_flow();
        flow.update_contact(ContactUpdate {
            first_name: Some("\"><script>".to_string()),
            ..Default::default()
        })
        .unwrap();

        let html = quote_html(&flow, Some("Please fill in every required field"));
        assert!(!html.contains("\"><script>"));
        assert!(html.contains("Please fill in every required field"));
    }
}
