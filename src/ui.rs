use crate::confirm::{Appearance, CONFIRM_WINDOW};
use crate::models::{Button, WalkingStatus};

const ARMED_LABEL: &str = "👆 Click Again to Confirm";
const ARMED_COLOR: &str = "#FF9800";
const COUNTDOWN_SECONDS: u32 = 5;

pub fn render_index(
    timestamp: &str,
    buttons: &[(Button, Appearance)],
    endpoint: &str,
    alert: Option<&str>,
) -> String {
    let medication = buttons
        .iter()
        .filter(|(button, _)| matches!(button, Button::Medication))
        .map(|(button, appearance)| render_button(*button, *appearance))
        .collect::<String>();
    let walking = buttons
        .iter()
        .filter(|(button, _)| matches!(button, Button::Walking(_)))
        .map(|(button, appearance)| render_button(*button, *appearance))
        .collect::<String>();
    let alert = alert
        .map(|text| format!(r#"<div class="alert" role="alert">{}</div>"#, escape_html(text)))
        .unwrap_or_default();

    INDEX_HTML
        .replace("{{STYLE}}", SHARED_STYLE)
        .replace("{{WINDOW_MS}}", &CONFIRM_WINDOW.as_millis().to_string())
        .replace("{{ARMED_LABEL}}", ARMED_LABEL)
        .replace("{{ARMED_COLOR}}", ARMED_COLOR)
        .replace("{{ENDPOINT}}", &escape_js(endpoint))
        .replace("{{MEDICATION_BUTTON}}", &medication)
        .replace("{{WALKING_BUTTONS}}", &walking)
        .replace("{{TIMESTAMP}}", &escape_html(timestamp))
        .replace("{{ALERT}}", &alert)
}

fn render_button(button: Button, appearance: Appearance) -> String {
    let class = match button {
        Button::Medication => "medication-button",
        Button::Walking(_) => "walking-button",
    };
    let (label, color, extra) = match appearance {
        Appearance::Default => (button.label(), button.color(), ""),
        Appearance::Armed => (ARMED_LABEL, ARMED_COLOR, ""),
        Appearance::Dimmed => (
            button.label(),
            button.color(),
            " opacity: 0.4; pointer-events: none;",
        ),
    };
    let disabled = if appearance == Appearance::Dimmed { " disabled" } else { "" };

    format!(
        r#"<form class="press-form" method="post" action="{action}">
        <button type="submit" class="{class}" data-key="{key}" data-state="{state}" data-label="{default_label}" data-color="{default_color}" style="background-color: {color};{extra}"{disabled}>{label}</button>
      </form>
      "#,
        action = button.press_path(),
        key = button.key(),
        state = appearance_name(appearance),
        default_label = button.label(),
        default_color = button.color(),
    )
}

fn appearance_name(appearance: Appearance) -> &'static str {
    match appearance {
        Appearance::Default => "default",
        Appearance::Armed => "armed",
        Appearance::Dimmed => "dimmed",
    }
}

pub fn render_medication(timestamp: &str) -> String {
    CONFIRMATION_HTML
        .replace("{{STYLE}}", SHARED_STYLE)
        .replace("{{TITLE}}", "Medication Logged")
        .replace("{{CLASS}}", "status-medication")
        .replace("{{ICON}}", "💊")
        .replace("{{MESSAGE}}", "Medication Logged")
        .replace("{{TIMESTAMP}}", &escape_html(timestamp))
        .replace("{{COUNTDOWN}}", &COUNTDOWN_SECONDS.to_string())
}

pub fn render_walking(status: WalkingStatus, timestamp: &str) -> String {
    let message = match status {
        WalkingStatus::Difficult => "Walking Difficulty Logged",
        WalkingStatus::Okay | WalkingStatus::Good => "Walking Status Logged",
    };
    CONFIRMATION_HTML
        .replace("{{STYLE}}", SHARED_STYLE)
        .replace("{{TITLE}}", message)
        .replace("{{CLASS}}", &format!("status-{status}"))
        .replace("{{ICON}}", "🚶‍♂️")
        .replace("{{MESSAGE}}", message)
        .replace("{{TIMESTAMP}}", &escape_html(timestamp))
        .replace("{{COUNTDOWN}}", &COUNTDOWN_SECONDS.to_string())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn escape_js(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('<', "\\u003c")
}

const SHARED_STYLE: &str = r#"
    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #f3f7f4, #e3efe6 60%, #f6f9f7 100%);
      color: #243028;
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .container {
      width: min(560px, 100%);
      background: rgba(255, 255, 255, 0.9);
      border-radius: 28px;
      box-shadow: 0 24px 60px rgba(36, 48, 40, 0.16);
      padding: 36px;
      display: grid;
      gap: 24px;
      text-align: center;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .timestamp {
      margin: 0;
      color: #5d6a61;
    }

    .alert {
      background: #fdecea;
      color: #b3261e;
      border-radius: 14px;
      padding: 12px 16px;
      font-weight: 600;
    }

    @media (max-width: 600px) {
      .container {
        padding: 28px 22px;
      }
    }
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Health Log</title>
  <style>
{{STYLE}}
    .actions {
      display: grid;
      gap: 14px;
    }

    .press-form {
      margin: 0;
    }

    .medication-button,
    .walking-button {
      width: 100%;
      appearance: none;
      border: none;
      border-radius: 18px;
      padding: 22px 20px;
      font-size: 1.2rem;
      font-weight: 600;
      color: white;
      cursor: pointer;
      transition: background-color 300ms ease, opacity 300ms ease;
    }

    .section-label {
      margin: 8px 0 0;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7b867e;
    }
  </style>
</head>
<body>
  <main class="container">
    <header>
      <h1>Health Log</h1>
      <p class="timestamp" id="timestamp">{{TIMESTAMP}}</p>
    </header>

    {{ALERT}}

    <section class="actions">
      {{MEDICATION_BUTTON}}
      <p class="section-label">How is walking today?</p>
      {{WALKING_BUTTONS}}
    </section>
  </main>

  <script>
    const API_ENDPOINT = '{{ENDPOINT}}';
    const CONFIRM_WINDOW_MS = {{WINDOW_MS}};
    const ARMED_LABEL = '{{ARMED_LABEL}}';
    const ARMED_COLOR = '{{ARMED_COLOR}}';

    const buttons = Array.from(document.querySelectorAll('.medication-button, .walking-button'));
    const defaults = new Map(
      buttons.map((btn) => [btn.dataset.key, { label: btn.dataset.label, color: btn.dataset.color }])
    );

    let armedKey = null;
    let armedTimer = null;

    const clearTimer = () => {
      if (armedTimer) {
        clearTimeout(armedTimer);
        armedTimer = null;
      }
    };

    const resetAllButtons = () => {
      buttons.forEach((btn) => {
        const original = defaults.get(btn.dataset.key);
        btn.disabled = false;
        btn.style.opacity = '1';
        btn.style.pointerEvents = 'auto';
        btn.style.backgroundColor = original.color;
        setTimeout(() => {
          btn.textContent = original.label;
        }, 50);
      });
    };

    const arm = (button) => {
      clearTimer();
      resetAllButtons();
      armedKey = button.dataset.key;
      button.style.backgroundColor = ARMED_COLOR;
      setTimeout(() => {
        button.textContent = ARMED_LABEL;
      }, 100);
      buttons.forEach((btn) => {
        if (btn !== button) {
          btn.style.opacity = '0.4';
          btn.style.pointerEvents = 'none';
        }
      });
      armedTimer = setTimeout(() => {
        armedTimer = null;
        resetAllButtons();
        armedKey = null;
      }, CONFIRM_WINDOW_MS);
    };

    const apiTimestamp = () => {
      const now = new Date();
      return {
        timestamp: now.toLocaleTimeString('en-US', { hour: 'numeric', minute: '2-digit', hour12: true }),
        date: now.toLocaleDateString('en-US', { weekday: 'long', month: 'long', day: 'numeric', year: 'numeric' })
      };
    };

    const recordFor = (key) => {
      const stamp = apiTimestamp();
      if (key === 'medication') {
        return { logType: 'medication', timestamp: stamp.timestamp, date: stamp.date };
      }
      return { logType: 'sentiment', timestamp: stamp.timestamp, date: stamp.date, status: key.replace('walking-', '') };
    };

    const targetFor = (key) =>
      key === 'medication' ? 'medication.html' : `walking.html?status=${key.replace('walking-', '')}`;

    const logHealthData = async (data) => {
      try {
        const res = await fetch(API_ENDPOINT, {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(data)
        });
        const result = await res.json();
        if (res.ok && result.status === 'success') {
          return { success: true, message: result.message };
        }
        console.error('API Error:', result);
        return { success: false, error: result.error || 'Unknown error occurred' };
      } catch (err) {
        console.error('Network Error:', err);
        return { success: false, error: 'Network error - please check your connection' };
      }
    };

    const confirmPress = async (key) => {
      clearTimer();
      armedKey = null;
      const result = await logHealthData(recordFor(key));
      if (result.success) {
        window.location.href = targetFor(key);
      } else {
        alert(`Error: ${result.error}`);
        resetAllButtons();
        armedKey = null;
      }
    };

    document.querySelectorAll('.press-form').forEach((form) => {
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        const button = form.querySelector('button');
        if (armedKey === button.dataset.key) {
          confirmPress(button.dataset.key);
        } else {
          arm(button);
        }
      });
    });

  </script>
</body>
</html>
"#;

const CONFIRMATION_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
{{STYLE}}
    .icon {
      font-size: 4rem;
    }

    .status-medication h1,
    .status-good h1 {
      color: #2e7d32;
    }

    .status-okay h1 {
      color: #e68a00;
    }

    .status-difficult h1 {
      color: #c62828;
    }

    .back {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      background: #2f4858;
      color: white;
      cursor: pointer;
    }
  </style>
</head>
<body>
  <main class="container {{CLASS}}" id="container">
    <div class="icon">{{ICON}}</div>
    <h1 id="success-message">{{MESSAGE}}</h1>
    <p class="timestamp" id="timestamp">{{TIMESTAMP}}</p>
    <p id="countdown">Returning to main page in {{COUNTDOWN}} seconds...</p>
    <button class="back" type="button" onclick="window.location.href = 'index.html'">Back</button>
  </main>

  <script>
    let seconds = {{COUNTDOWN}};
    const countdownEl = document.getElementById('countdown');

    const tick = () => {
      if (seconds > 0) {
        countdownEl.textContent = `Returning to main page in ${seconds} seconds...`;
        seconds -= 1;
        setTimeout(tick, 1000);
      } else {
        window.location.href = 'index.html';
      }
    };

    tick();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn appearances(armed: Option<Button>) -> Vec<(Button, Appearance)> {
        Button::ALL
            .iter()
            .map(|&button| {
                let appearance = match armed {
                    None => Appearance::Default,
                    Some(a) if a == button => Appearance::Armed,
                    Some(_) => Appearance::Dimmed,
                };
                (button, appearance)
            })
            .collect()
    }

    #[test]
    fn index_renders_all_buttons_in_default_state() {
        let html = render_index("9:05 AM on Friday, October 16", &appearances(None), "/api/log", None);
        for button in Button::ALL {
            assert!(html.contains(button.label()));
            assert!(html.contains(&format!(r#"action="{}""#, button.press_path())));
        }
        assert!(!html.contains(r#"data-state="armed""#));
        assert!(html.contains("const API_ENDPOINT = '/api/log';"));
        assert!(html.contains("const CONFIRM_WINDOW_MS = 2000;"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn armed_button_dims_its_peers() {
        let armed = Button::Walking(WalkingStatus::Okay);
        let html = render_index("now", &appearances(Some(armed)), "/api/log", None);
        assert_eq!(html.matches(r#"data-state="armed""#).count(), 1);
        assert_eq!(html.matches(r#"data-state="dimmed""#).count(), 3);
        assert!(html.contains(r#"data-key="walking-okay" data-state="armed""#));
    }

    #[test]
    fn alert_text_is_escaped() {
        let html = render_index("now", &appearances(None), "/api/log", Some("Error: <bad>"));
        assert!(html.contains("Error: &lt;bad&gt;"));
    }

    #[test]
    fn walking_message_depends_on_status() {
        assert!(render_walking(WalkingStatus::Difficult, "now").contains("Walking Difficulty Logged"));
        let okay = render_walking(WalkingStatus::Okay, "now");
        assert!(okay.contains("Walking Status Logged"));
        assert!(okay.contains("status-okay"));
    }

    #[test]
    fn medication_page_has_countdown() {
        let html = render_medication("9:05 AM on Friday, October 16");
        assert!(html.contains("Returning to main page in 5 seconds..."));
        assert!(html.contains("9:05 AM on Friday, October 16"));
    }
}
