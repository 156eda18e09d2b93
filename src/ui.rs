use crate::ledger::leader_summary;
use crate::models::{LeaderSummary, LedgerState, Player, PlayerNames};

/// Renders the leader classification as the scoreboard headline.
pub fn leader_text(names: &PlayerNames, summary: LeaderSummary) -> String {
    match summary {
        LeaderSummary::NoWins => "No winner yet. Record the first week!".to_string(),
        LeaderSummary::Tie { wins } => format!("Tie! Both have {wins} win(s)."),
        LeaderSummary::Leader { player, margin } => {
            format!("{} is ahead by {margin} win(s)!", names.of(player))
        }
    }
}

pub fn render_index(names: &PlayerNames, state: &LedgerState) -> String {
    let summary = leader_summary(state);
    let (a_leading, b_leading) = match summary {
        LeaderSummary::Leader {
            player: Player::A, ..
        } => ("is-leading", ""),
        LeaderSummary::Leader {
            player: Player::B, ..
        } => ("", "is-leading"),
        _ => ("", ""),
    };

    INDEX_HTML
        .replace("{{A_NAME}}", &escape(&names.a))
        .replace("{{B_NAME}}", &escape(&names.b))
        .replace("{{A_SCORE}}", &state.totals.a.to_string())
        .replace("{{B_SCORE}}", &state.totals.b.to_string())
        .replace("{{A_LEADING}}", a_leading)
        .replace("{{B_LEADING}}", b_leading)
        .replace("{{LEADER_TEXT}}", &escape(&leader_text(names, summary)))
        .replace("{{WEEKS}}", &weeks_html(names, state))
}

fn weeks_html(names: &PlayerNames, state: &LedgerState) -> String {
    if state.weeks.is_empty() {
        return r#"<li class="empty">No weeks recorded yet.</li>"#.to_string();
    }

    state
        .weeks
        .iter()
        .map(|week| {
            format!(
                r#"<li><span class="week">{}</span><span class="winner winner-{}">{}</span></li>"#,
                escape(&week.label),
                week.winner.key(),
                escape(names.of(week.winner)),
            )
        })
        .collect()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weekly Scoreboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f1ea;
      --bg-2: #cfe3d8;
      --ink: #26302b;
      --accent: #2f7d5d;
      --accent-2: #b35a3c;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 20px 50px rgba(38, 48, 43, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e7efe6 60%, #f2efe7 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(680px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .leader-line {
      margin: 0;
      color: #53605a;
      font-size: 1.05rem;
    }

    .cards {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 18px;
    }

    .card {
      border: 2px solid transparent;
      border-radius: 18px;
      background: #ffffff;
      padding: 22px;
      text-align: center;
      display: grid;
      gap: 10px;
    }

    .card.is-leading {
      border-color: var(--accent);
      box-shadow: 0 10px 26px rgba(47, 125, 93, 0.22);
    }

    .card .name {
      font-weight: 600;
      font-size: 1.1rem;
    }

    .card .score {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 3rem;
      line-height: 1;
    }

    button {
      font: inherit;
      border: none;
      border-radius: 12px;
      padding: 12px 18px;
      cursor: pointer;
      background: var(--accent);
      color: #ffffff;
    }

    button.secondary {
      background: #e7e3d9;
      color: var(--ink);
    }

    button.danger {
      background: var(--accent-2);
    }

    .controls {
      display: flex;
      gap: 12px;
      justify-content: flex-end;
    }

    .history h2 {
      margin: 0 0 10px;
      font-size: 1.1rem;
    }

    .history ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .history li {
      display: flex;
      justify-content: space-between;
      background: #ffffff;
      border-radius: 12px;
      padding: 10px 14px;
    }

    .history li.empty {
      color: #8a9189;
      justify-content: center;
    }

    .winner-a {
      color: var(--accent);
      font-weight: 600;
    }

    .winner-b {
      color: var(--accent-2);
      font-weight: 600;
    }

    #toast {
      position: fixed;
      bottom: 24px;
      left: 50%;
      transform: translateX(-50%);
      background: var(--ink);
      color: #ffffff;
      border-radius: 12px;
      padding: 12px 20px;
      opacity: 0;
      pointer-events: none;
      transition: opacity 200ms ease;
    }

    #toast.show {
      opacity: 1;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Weekly Scoreboard</h1>
      <p class="leader-line">{{LEADER_TEXT}}</p>
    </header>

    <section class="cards">
      <div class="card {{A_LEADING}}">
        <span class="name">{{A_NAME}}</span>
        <span class="score">{{A_SCORE}}</span>
        <button data-win="a">{{A_NAME}} won</button>
      </div>
      <div class="card {{B_LEADING}}">
        <span class="name">{{B_NAME}}</span>
        <span class="score">{{B_SCORE}}</span>
        <button data-win="b">{{B_NAME}} won</button>
      </div>
    </section>

    <div class="controls">
      <button class="secondary" id="btn-undo">Undo last week</button>
      <button class="danger" id="btn-reset">Reset</button>
    </div>

    <section class="history">
      <h2>Weeks</h2>
      <ul id="weeks-list">{{WEEKS}}</ul>
    </section>
  </main>

  <div id="toast"></div>

  <script>
    let toastTimeout = null;
    const showToast = (message) => {
      const toast = document.getElementById('toast');
      toast.textContent = message;
      toast.classList.add('show');
      if (toastTimeout) clearTimeout(toastTimeout);
      toastTimeout = setTimeout(() => toast.classList.remove('show'), 2500);
    };

    const call = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: body ? JSON.stringify(body) : null
      });

      if (!res.ok) {
        const data = await res.json().catch(() => ({}));
        throw new Error(data.error || `HTTP ${res.status}`);
      }

      location.reload();
    };

    document.querySelectorAll('[data-win]').forEach((button) => {
      button.addEventListener('click', () => {
        call('/api/register', { winner: button.dataset.win })
          .catch((err) => showToast(err.message));
      });
    });

    document.getElementById('btn-undo').addEventListener('click', () => {
      call('/api/undo').catch((err) => showToast(err.message));
    });

    document.getElementById('btn-reset').addEventListener('click', () => {
      const sure = confirm('Erase the whole history and zero the scores?');
      if (!sure) return;
      call('/api/reset').catch((err) => showToast(err.message));
    });
  </script>
</body>
</html>
"#;
