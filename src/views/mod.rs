//! Plantillas HTML
//!
//! Páginas renderizadas en el servidor con `format!`; todo texto que viene
//! del inventario o del cliente pasa por `html_escape`.

pub mod listing;
pub mod quote_modal;

pub use listing::listing_html;
pub use quote_modal::quote_html;

/// Estilos compartidos
pub const STYLE_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }
header { background: #fff; border-bottom: 1px solid #e5e7eb; padding: 16px 32px;
         display: flex; justify-content: space-between; align-items: center; }
header h1 { font-size: 24px; }
.muted { color: #6b7280; font-size: 14px; }
.tiny { color: #9ca3af; font-size: 12px; }
.accent { color: #2563eb; font-weight: 500; }
.toolbar { display: flex; gap: 16px; }
.toolbar input, .toolbar select { padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 8px; }
section { max-width: 1200px; margin: 0 auto; padding: 32px; }
.section-head { display: flex; justify-content: space-between; margin-bottom: 24px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 24px; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 12px; overflow: hidden; }
.card img, .vehicle img { width: 100%; aspect-ratio: 4 / 3; object-fit: cover; background: #f3f4f6; }
.card .body { padding: 20px; }
.specs { display: flex; gap: 16px; margin: 12px 0; }
.card .foot { display: flex; justify-content: space-between; align-items: center;
              border-top: 1px solid #f3f4f6; padding-top: 16px; }
.price { font-size: 20px; font-weight: 700; }
button { background: #2563eb; color: #fff; border: 0; border-radius: 8px; padding: 10px 16px;
         font-weight: 600; cursor: pointer; }
button:disabled { opacity: .5; cursor: not-allowed; }
button.secondary { background: #f3f4f6; color: #374151; }
.modal { max-width: 900px; margin: 32px auto; background: #fff; border: 1px solid #e5e7eb;
         border-radius: 16px; display: flex; overflow: hidden; position: relative; }
.modal .close { position: absolute; top: 16px; right: 16px; }
.vehicle { width: 40%; background: #f9fafb; padding: 24px; }
.vehicle dl { margin-top: 16px; }
.vehicle dt { color: #6b7280; font-size: 12px; margin-top: 8px; }
.form { width: 60%; padding: 24px; }
.form label { display: block; font-size: 14px; margin: 12px 0 4px; }
.form input[type=text], .form input[type=email], .form input[type=tel], .form textarea {
    width: 100%; padding: 8px 12px; border: 1px solid #d1d5db; border-radius: 8px; }
.form .consent { display: flex; gap: 12px; align-items: flex-start; font-size: 12px; color: #6b7280; }
.form .submit { width: 100%; margin-top: 16px; padding: 16px; }
.estimate { font-size: 28px; font-weight: 700; margin: 8px 0; }
.banner { background: #fef2f2; border: 1px solid #fecaca; color: #991b1b; border-radius: 8px;
          padding: 12px; margin-bottom: 16px; display: flex; justify-content: space-between; }
.done { padding: 48px; text-align: center; width: 100%; }
.done h2 { margin-bottom: 8px; }
.done p { margin-bottom: 24px; }
"#;

/// Documento HTML completo
pub fn page_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<style>{}</style>
</head>
<body>
{}
</body>
</html>"#,
        html_escape(title),
        STYLE_CSS,
        body
    )
}

/// Página mínima para errores de navegación (404, 400...)
pub fn error_html(title: &str, message: &str) -> String {
    page_html(
        title,
        &format!(
            r#"<section><h2>{}</h2><p class="muted">{}</p><p><a href="/">Back to inventory</a></p></section>"#,
            html_escape(title),
            html_escape(message)
        ),
    )
}

pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(html_escape("Today's Price"), "Today&#39;s Price");
    }
}
