//! Landing page.
//!
//! A single self-contained HTML page: the merchant name in the header and a
//! minimal chat box that posts to `/chat`.

use axum::{extract::State, response::Html};

use super::AppState;

const INDEX_TEMPLATE: &str = r#"<!doctype html>
<html lang="tr">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{company_name}} — Canlı Destek</title>
  <style>
    *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: system-ui, -apple-system, sans-serif;
      background: #ece5dd; color: #222;
      display: flex; justify-content: center; height: 100vh;
    }
    .chat { display: flex; flex-direction: column; width: 100%; max-width: 480px; background: #fff; }
    header { background: #075e54; color: #fff; padding: 1rem; font-size: 1.1rem; }
    #log { flex: 1; overflow-y: auto; padding: 1rem; display: flex; flex-direction: column; gap: 0.5rem; }
    .msg { padding: 0.5rem 0.75rem; border-radius: 8px; max-width: 80%; white-space: pre-wrap; }
    .user { align-self: flex-end; background: #dcf8c6; }
    .bot  { align-self: flex-start; background: #f1f0f0; }
    form { display: flex; border-top: 1px solid #ddd; }
    input { flex: 1; padding: 0.75rem; border: none; font-size: 1rem; }
    button { padding: 0 1.25rem; border: none; background: #128c7e; color: #fff; font-size: 1rem; }
  </style>
</head>
<body>
  <div class="chat">
    <header>{{company_name}}</header>
    <div id="log"></div>
    <form id="form">
      <input id="input" autocomplete="off" placeholder="Mesajınızı yazın..." />
      <button type="submit">Gönder</button>
    </form>
  </div>
  <script>
    const log = document.getElementById("log");
    const input = document.getElementById("input");
    function add(text, cls) {
      const div = document.createElement("div");
      div.className = "msg " + cls;
      div.textContent = text;
      log.appendChild(div);
      log.scrollTop = log.scrollHeight;
    }
    document.getElementById("form").addEventListener("submit", async (e) => {
      e.preventDefault();
      const message = input.value.trim();
      if (!message) return;
      input.value = "";
      add(message, "user");
      try {
        const res = await fetch("/chat", {
          method: "POST",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify({ message }),
        });
        const data = await res.json();
        add(data.response, "bot");
      } catch (_) {
        add("Bağlantı sorunu var, internetini kontrol et.", "bot");
      }
    });
  </script>
</body>
</html>
"#;

/// GET /: landing page for the current merchant.
pub(super) async fn root(State(state): State<AppState>) -> Html<String> {
    let profile = state.chat.profile().await;
    Html(render_index(&profile.name))
}

fn render_index(company_name: &str) -> String {
    INDEX_TEMPLATE.replace("{{company_name}}", &escape_html(company_name))
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
