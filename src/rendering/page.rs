//! HTML page rendering for the verification site.
//!
//! No template engine: the page is one self-contained HTML document built by
//! plain string rendering, in one of three states — search form, not-found
//! panel, or result panel. All sheet- and user-supplied text is escaped
//! before it reaches the page.

use crate::domain::resolve::Verdict;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fmt::Write;

const PAGE_TITLE: &str = "Verificación – ContabilApp";

const STYLE: &str = r#"*{box-sizing:border-box;margin:0;padding:0;font-family:'Segoe UI',sans-serif;}
body{background:#0f0f1a;color:#cdd6f4;min-height:100vh;}
header{background:#1a1a2e;padding:18px 28px;border-bottom:2px solid #313244;
       display:flex;align-items:center;gap:14px;}
header h1{color:#89b4fa;font-size:18px;font-weight:700;}
header p{color:#6c7086;font-size:11px;margin-top:3px;}
.container{max-width:700px;margin:32px auto;padding:0 16px;}
.card{background:#1a1a2e;border-radius:16px;padding:28px;
      border:1px solid #313244;margin-bottom:20px;}
.card.ok{border-color:#a6e3a1;border-width:2px;
         box-shadow:0 0 24px rgba(166,227,161,0.12);}
.card.fail{border-color:#f38ba8;border-width:2px;}
.status-bar{display:flex;align-items:center;gap:16px;margin-bottom:24px;
            padding:16px;border-radius:10px;}
.status-bar.ok{background:rgba(166,227,161,0.08);}
.status-bar.fail{background:rgba(243,139,168,0.08);}
.icon{font-size:44px;line-height:1;}
.status-title{font-size:18px;font-weight:700;margin-bottom:4px;}
.ok .status-title{color:#a6e3a1;}
.fail .status-title{color:#f38ba8;}
.badge{display:inline-block;padding:5px 14px;border-radius:20px;
       font-size:12px;font-weight:700;letter-spacing:.5px;}
.badge-ok{background:#1a3a2a;color:#a6e3a1;border:1px solid #a6e3a1;}
.badge-fail{background:#3a1a1a;color:#f38ba8;border:1px solid #f38ba8;}
.grid{display:grid;grid-template-columns:1fr 1fr;gap:20px;margin-top:8px;}
@media(max-width:560px){.grid{grid-template-columns:1fr;}}
.row{padding:9px 0;border-bottom:1px solid #252535;}
.row:last-child{border:none;}
.key{color:#89b4fa;font-size:11px;font-weight:600;text-transform:uppercase;
     letter-spacing:.5px;margin-bottom:2px;}
.val{color:#cdd6f4;font-size:14px;word-break:break-all;}
.qr-panel{text-align:center;display:flex;flex-direction:column;
          align-items:center;justify-content:center;gap:10px;}
.qr-img{width:180px;height:180px;border-radius:12px;
        border:3px solid #89b4fa;object-fit:contain;
        background:#fff;padding:6px;}
.qr-caption{color:#6c7086;font-size:11px;}
.no-qr{width:180px;height:180px;border-radius:12px;border:2px dashed #45475a;
        display:flex;align-items:center;justify-content:center;
        color:#45475a;font-size:12px;text-align:center;padding:16px;}
input{width:100%;padding:13px 16px;border-radius:10px;background:#252535;
      border:1px solid #45475a;color:#cdd6f4;font-size:15px;outline:none;
      margin-bottom:14px;transition:border .2s;}
input:focus{border-color:#89b4fa;}
button{background:#89b4fa;color:#1e1e2e;font-weight:700;border:none;
       border-radius:10px;padding:13px 32px;font-size:15px;cursor:pointer;
       width:100%;transition:background .2s;}
button:hover{background:#b4befe;}
.back{display:inline-block;margin-top:20px;color:#89b4fa;
      text-decoration:none;font-size:13px;}
.back:hover{color:#b4befe;}
.hint{color:#6c7086;font-size:12px;margin-top:10px;text-align:center;}
.not-found{text-align:center;padding:20px 0;}
.not-found .icon{font-size:56px;margin-bottom:16px;display:block;}
.sello{margin-top:20px;padding:12px 16px;border-radius:8px;
       background:#252535;font-size:12px;color:#6c7086;text-align:center;}"#;

/// Renders the full page for one request.
///
/// `verdict` is `Some` only when a row matched; a submitted code with no
/// verdict renders the not-found panel, and no code renders the search form.
pub fn render_page(verdict: Option<&Verdict>, codigo: Option<&str>) -> String {
    let body = match (verdict, codigo) {
        (Some(v), _) => result_panel(v),
        (None, Some(c)) if !c.is_empty() => not_found_panel(c),
        _ => search_form(),
    };

    format!(
        "<!DOCTYPE html><html lang=\"es\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n\
         <title>{PAGE_TITLE}</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n\
         <header>\n  <span style=\"font-size:30px\">🔐</span>\n  <div>\n    \
         <h1>ContabilApp – Verificación de Documentos</h1>\n    \
         <p>Sistema de autenticidad de informes financieros · CB &amp; Consultor</p>\n  \
         </div>\n</header>\n<div class=\"container\">\n{body}\n</div>\n</body></html>"
    )
}

fn result_panel(verdict: &Verdict) -> String {
    let state = if verdict.verified { "ok" } else { "fail" };
    let icon = if verdict.verified { "✅" } else { "⚠️" };
    let title = if verdict.verified {
        "Documento VÁLIDO y auténtico"
    } else {
        "Documento no verificado"
    };
    let badge_class = if verdict.verified {
        "badge badge-ok"
    } else {
        "badge badge-fail"
    };
    let badge_text = if verdict.verified {
        "✔ VERIFICADO"
    } else {
        "⚠ PENDIENTE DE VERIFICACIÓN"
    };

    let mut rows = String::new();
    for (label, value) in &verdict.fields {
        let _ = write!(
            rows,
            "<div class=\"row\"><div class=\"key\">{}</div><div class=\"val\">{}</div></div>",
            escape_html(label),
            escape_html(value)
        );
    }

    let qr_panel = match verdict.qr_base64.as_deref().filter(|b| payload_decodes(b)) {
        Some(b64) => format!(
            "<img class=\"qr-img\" src=\"data:image/png;base64,{b64}\" alt=\"Código QR\">\
             <span class=\"qr-caption\">📱 Código QR del documento</span>"
        ),
        None => "<div class=\"no-qr\">Sin imagen QR disponible</div>".to_string(),
    };

    format!(
        "<div class=\"card {state}\">\n\
         <div class=\"status-bar {state}\">\n\
           <span class=\"icon\">{icon}</span>\n\
           <div>\n\
             <div class=\"status-title\">{title}</div>\n\
             <span class=\"{badge_class}\">{badge_text}</span>\n\
           </div>\n\
         </div>\n\
         <div class=\"grid\">\n\
           <div class=\"info-panel\">{rows}</div>\n\
           <div class=\"qr-panel\">{qr_panel}</div>\n\
         </div>\n\
         <div class=\"sello\">🏢 CB &amp; Consultor · Sistema de Verificación Documental · \
         Este documento fue generado y certificado digitalmente</div>\n\
         </div>\n\
         <a href=\"/\" class=\"back\">← Verificar otro documento</a>"
    )
}

fn not_found_panel(codigo: &str) -> String {
    format!(
        "<div class=\"card\">\n\
         <div class=\"not-found\">\n\
           <span class=\"icon\">🔍</span>\n\
           <p style=\"color:#f38ba8;font-size:17px;font-weight:600;margin-bottom:8px;\">\
           Documento no encontrado</p>\n\
           <p style=\"color:#a6adc8;font-size:14px;\">\
           No se encontró ningún documento con el código:<br>\
           <strong style=\"color:#89b4fa;\">{}</strong></p>\n\
         </div>\n\
         <a href=\"/\" class=\"back\" style=\"display:block;text-align:center;\">← Volver a buscar</a>\n\
         </div>",
        escape_html(codigo)
    )
}

fn search_form() -> String {
    "<div class=\"card\">\n\
     <h2 style=\"color:#89b4fa;margin-bottom:8px;font-size:17px;\">\
     🔍 Verificar autenticidad de documento</h2>\n\
     <p style=\"color:#a6adc8;margin-bottom:20px;font-size:14px;line-height:1.6;\">\
     Ingresa el código único del documento o escanea el código QR \
     con tu celular para verificar su autenticidad.</p>\n\
     <form method=\"get\" action=\"/verificar\">\n\
       <input name=\"codigo\" placeholder=\"Código del documento (ej: CC6663...)\" autofocus>\n\
       <button type=\"submit\">🔍 Verificar documento</button>\n\
       <p class=\"hint\">Escanea el código QR del documento para verificación automática</p>\n\
     </form>\n\
     </div>"
        .to_string()
}

// The sheet cell is attacker-influenced like any other; only embed payloads
// that actually decode as base64.
fn payload_decodes(b64: &str) -> bool {
    BASE64.decode(b64).is_ok()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(verified: bool) -> Verdict {
        Verdict {
            matched: true,
            verified,
            fields: vec![("Cliente".to_string(), "Acme".to_string())],
            qr_base64: None,
        }
    }

    #[test]
    fn form_renders_when_nothing_submitted() {
        let page = render_page(None, None);
        assert!(page.contains("Verificar autenticidad de documento"));
        assert!(page.contains("action=\"/verificar\""));
    }

    #[test]
    fn empty_code_still_renders_the_form() {
        let page = render_page(None, Some(""));
        assert!(page.contains("Verificar autenticidad de documento"));
    }

    #[test]
    fn not_found_echoes_the_escaped_code() {
        let page = render_page(None, Some("<b>CC1</b>"));
        assert!(page.contains("Documento no encontrado"));
        assert!(page.contains("&lt;b&gt;CC1&lt;/b&gt;"));
        assert!(!page.contains("<b>CC1</b>"));
    }

    #[test]
    fn verified_and_pending_styles() {
        let ok = render_page(Some(&verdict(true)), Some("CC1"));
        assert!(ok.contains("card ok"));
        assert!(ok.contains("Documento VÁLIDO y auténtico"));
        assert!(ok.contains("Cliente"));

        let fail = render_page(Some(&verdict(false)), Some("CC1"));
        assert!(fail.contains("card fail"));
        assert!(fail.contains("PENDIENTE DE VERIFICACIÓN"));
    }

    #[test]
    fn qr_image_only_when_payload_decodes() {
        let mut v = verdict(true);
        v.qr_base64 = Some("!!not-base64!!".repeat(10));
        let page = render_page(Some(&v), Some("CC1"));
        assert!(page.contains("Sin imagen QR disponible"));

        v.qr_base64 = Some("QUJD".repeat(20));
        let page = render_page(Some(&v), Some("CC1"));
        assert!(page.contains("data:image/png;base64,"));
    }

    #[test]
    fn field_values_are_escaped() {
        let mut v = verdict(false);
        v.fields = vec![("Nota".to_string(), "<script>x</script>".to_string())];
        let page = render_page(Some(&v), Some("CC1"));
        assert!(!page.contains("<script>x</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
