use crate::catalog::{Catalog, DuaCategory, NameList};
use crate::remote::DAILY_PRAYERS;

const COUNTRIES: [&str; 10] = [
    "Pakistan",
    "Saudi Arabia",
    "UAE",
    "USA",
    "UK",
    "India",
    "Bangladesh",
    "Egypt",
    "Turkey",
    "Malaysia",
];

pub fn render_index(catalog: &Catalog) -> String {
    let dua_options: String = DuaCategory::ALL
        .iter()
        .map(|category| {
            format!(
                "<option value=\"{}\">{}</option>",
                wire_name(category),
                escape_html(category.title())
            )
        })
        .collect();
    let name_carousels: String = NameList::ALL
        .iter()
        .map(|list| {
            let value = wire_name(list);
            let first = list.names()[0];
            format!(
                "<div class=\"row\" data-names=\"{value}\">\
                 <h3>{}</h3>\
                 <div class=\"arabic\" data-name-arabic>{}</div>\
                 <div data-name-english>{}</div>\
                 <div class=\"toolbar\">\
                 <button type=\"button\" data-name-step=\"prev_name\">Previous</button>\
                 <span data-name-position>1 / {}</span>\
                 <button type=\"button\" data-name-step=\"next_name\">Next</button>\
                 </div></div>",
                escape_html(list.title()),
                escape_html(first.arabic),
                escape_html(first.english),
                list.names().len()
            )
        })
        .collect();
    let country_options: String = COUNTRIES
        .iter()
        .map(|country| format!("<option>{country}</option>"))
        .collect();

    INDEX_HTML
        .replace("{{PHRASE_COUNT}}", &catalog.phrases().len().to_string())
        .replace("{{DUA_OPTIONS}}", &dua_options)
        .replace("{{NAME_CAROUSELS}}", &name_carousels)
        .replace("{{COUNTRY_OPTIONS}}", &country_options)
        .replace("{{PRAYERS}}", &DAILY_PRAYERS.join(", "))
}

/// The snake_case name serde gives a unit variant.
fn wire_name(value: &impl serde::Serialize) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>JannahWay - Islamic Growth</title>
  <style>
    :root {
      --bg-1: #1e1e1e;
      --bg-2: #3a2f0b;
      --ink: #e5e5e5;
      --accent: #ffd700;
      --accent-2: #614807;
      --card: rgba(37, 37, 37, 0.92);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.4);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%), var(--bg-1);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      grid-template-columns: 220px 1fr;
    }

    nav {
      padding: 28px 18px;
      display: grid;
      align-content: start;
      gap: 8px;
      background: #252525;
    }

    nav h2 {
      color: var(--accent);
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .app {
      padding: 32px;
      display: grid;
      align-content: start;
      gap: 24px;
    }

    h1, h3 {
      color: var(--accent);
      margin: 0;
    }

    button, select, input, textarea {
      border-radius: 10px;
      border: 2px solid var(--accent);
      background: var(--bg-1);
      color: var(--ink);
      padding: 8px 14px;
      font-size: 0.95rem;
    }

    button {
      cursor: pointer;
      font-weight: 600;
    }

    button.active, button:hover {
      background: var(--accent-2);
    }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
    }

    .rows.card {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
      gap: 14px;
    }

    .rows.list {
      display: grid;
      gap: 6px;
    }

    .row {
      background: var(--card);
      border-radius: 14px;
      padding: 14px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 8px;
    }

    .rows.list .row {
      grid-template-columns: 1fr auto auto auto;
      align-items: center;
    }

    .count {
      font-size: 1.6rem;
      color: var(--accent);
    }

    .arabic {
      direction: rtl;
      font-size: 1.4rem;
    }

    .status {
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #ff6b6b;
    }

    .status[data-type="warning"] {
      color: #ffb347;
    }

    .status[data-type="ok"] {
      color: #7bd88f;
    }

    .hidden {
      display: none !important;
    }

    textarea {
      width: 100%;
      min-height: 120px;
    }
  </style>
</head>
<body>
  <nav>
    <h2>JannahWay Portal</h2>
    <button type="button" data-section="home">Home</button>
    <button type="button" data-section="quran">Quran</button>
    <button type="button" data-section="tasbeeh">Tasbeeh</button>
    <button type="button" data-section="duas">Duas &amp; Wazaif</button>
    <button type="button" data-section="ramadan">Ramadan</button>
  </nav>

  <main class="app">
    <div class="status" id="status"></div>

    <section data-panel="home">
      <h1>Assalamu Alaikum</h1>
      <p>Count your dhikr, browse duas, read the Quran and look up today's prayer times.</p>
      {{NAME_CAROUSELS}}
    </section>

    <section data-panel="quran" class="hidden">
      <h1>Quran</h1>
      <div class="toolbar">
        <select id="surah-select"></select>
        <button type="button" id="bookmark-surah">Bookmark</button>
      </div>
      <div id="surah"></div>
      <h3>Bookmarks</h3>
      <div id="bookmarks"></div>
      <button type="button" id="clear-bookmarks">Clear All Bookmarks</button>
    </section>

    <section data-panel="tasbeeh" class="hidden">
      <h1>Dhikr Counter</h1>
      <p>{{PHRASE_COUNT}} adhkar ready to count. Add your own below.</p>
      <div class="toolbar">
        <input id="search" placeholder="Search dhikr" />
        <select id="category">
          <option value="all">All</option>
          <option value="most_used">Most used</option>
          <option value="matching">Matching search</option>
        </select>
        <button type="button" data-view="card">Cards</button>
        <button type="button" data-view="list">List</button>
      </div>
      <p id="statistics"></p>
      <div id="rows" class="rows card"></div>
      <div class="toolbar">
        <input id="custom" placeholder="Add custom tasbeeh" />
        <button type="button" id="add-custom">Add Tasbeeh</button>
        <button type="button" id="reset-all">Reset all</button>
        <button type="button" id="export">Download report</button>
      </div>
      <textarea id="import-text" placeholder="SubhanAllah (سبحان الله): 33"></textarea>
      <button type="button" id="import">Import counts</button>
    </section>

    <section data-panel="duas" class="hidden">
      <h1>Islamic Duas &amp; Wazaif</h1>
      <select id="dua-category">
        <option value="">Show All</option>
        {{DUA_OPTIONS}}
      </select>
      <div id="duas"></div>
    </section>

    <section data-panel="ramadan" class="hidden">
      <h1>Prayer Times</h1>
      <div class="toolbar">
        <select id="country">{{COUNTRY_OPTIONS}}</select>
        <input id="city" placeholder="Enter your city" />
        <button type="button" id="get-times">Get Prayer Times</button>
      </div>
      <p>Shows {{PRAYERS}}.</p>
      <div id="times"></div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    let sessionId = null;
    let currentSurah = null;

    const setStatus = (status) => {
      statusEl.textContent = status ? status.message : '';
      statusEl.dataset.type = status ? status.kind : '';
    };

    const el = (tag, text, className) => {
      const node = document.createElement(tag);
      if (text !== undefined) node.textContent = text;
      if (className) node.className = className;
      return node;
    };

    const send = async (action) => {
      const res = await fetch(`/api/sessions/${sessionId}/actions`, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(action)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      render(await res.json());
    };

    const render = (state) => {
      setStatus(state.status);
      document.querySelectorAll('[data-panel]').forEach((panel) => {
        panel.classList.toggle('hidden', panel.dataset.panel !== state.section);
      });
      document.querySelectorAll('[data-section]').forEach((button) => {
        button.classList.toggle('active', button.dataset.section === state.section);
      });
      document.querySelectorAll('[data-view]').forEach((button) => {
        button.classList.toggle('active', button.dataset.view === state.view);
      });

      const rows = document.getElementById('rows');
      rows.className = `rows ${state.view}`;
      rows.replaceChildren(...state.visible.map((entry) => {
        const row = el('div', undefined, 'row');
        const inc = el('button', '+1');
        inc.addEventListener('click', () => send({ action: 'increment', phrase: entry.phrase }).catch(fail));
        const reset = el('button', 'Reset');
        reset.addEventListener('click', () => send({ action: 'reset', phrase: entry.phrase }).catch(fail));
        row.append(el('span', entry.phrase), el('span', entry.count, 'count'), inc, reset);
        return row;
      }));

      state.names.forEach((card) => {
        const carousel = document.querySelector(`[data-names="${card.list}"]`);
        if (!carousel) return;
        carousel.querySelector('[data-name-arabic]').textContent = card.arabic;
        carousel.querySelector('[data-name-english]').textContent = card.english;
        carousel.querySelector('[data-name-position]').textContent = `${card.position} / ${card.of}`;
      });

      const bookmarks = document.getElementById('bookmarks');
      bookmarks.replaceChildren(...state.bookmarks.map((name) => {
        const row = el('div', undefined, 'toolbar');
        const remove = el('button', 'Remove');
        remove.addEventListener('click', () => send({ action: 'remove_bookmark', name }).catch(fail));
        row.append(el('span', name), remove);
        return row;
      }));

      if (state.statistics) {
        const top = state.statistics.most_recited;
        document.getElementById('statistics').textContent =
          `Total: ${state.statistics.total}` + (top ? ` | Most recited: ${top.phrase} (${top.count})` : '');
      }
    };

    const fail = (err) => setStatus({ kind: 'error', message: err.message });

    const refreshStats = () => send({ action: 'get_statistics' });

    const loadSurah = async (number) => {
      const res = await fetch(`/api/quran/surahs/${number}`);
      const target = document.getElementById('surah');
      if (!res.ok) {
        target.textContent = 'No data';
        currentSurah = null;
        return;
      }
      currentSurah = await res.json();
      const verses = currentSurah.verses.map((verse) => {
        const row = el('div', undefined, 'row');
        row.append(el('strong', `Verse ${verse.number}`), el('div', verse.arabic, 'arabic'), el('div', verse.english));
        return row;
      });
      const audio = el('audio');
      audio.controls = true;
      audio.src = currentSurah.audio_url;
      const heading = el('h3', `${currentSurah.english_name} (${currentSurah.name}) - ${currentSurah.revelation_type}`);
      const nodes = [heading, audio];
      if (currentSurah.show_basmala) nodes.push(el('div', 'بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ', 'arabic'));
      target.replaceChildren(...nodes, ...verses);
    };

    const loadSurahs = async () => {
      const res = await fetch('/api/quran/surahs');
      const surahs = res.ok ? await res.json() : [];
      const select = document.getElementById('surah-select');
      select.replaceChildren(...surahs.map((s) => {
        const option = el('option', `${s.number}. ${s.englishName} (${s.name})`);
        option.value = s.number;
        return option;
      }));
      if (surahs.length) await loadSurah(surahs[0].number);
    };

    const loadDuas = async () => {
      const category = document.getElementById('dua-category').value;
      const res = await fetch(category ? `/api/duas?category=${category}` : '/api/duas');
      const sections = await res.json();
      document.getElementById('duas').replaceChildren(...sections.flatMap((section) => [
        el('h3', section.title),
        ...section.duas.map((dua) => {
          const row = el('div', undefined, 'row');
          row.append(el('strong', dua.title), el('div', dua.text, 'arabic'));
          return row;
        })
      ]));
    };

    document.querySelectorAll('[data-section]').forEach((button) => {
      button.addEventListener('click', () => send({ action: 'navigate', section: button.dataset.section }).catch(fail));
    });
    document.querySelectorAll('[data-view]').forEach((button) => {
      button.addEventListener('click', () => send({ action: 'set_view', view: button.dataset.view }).catch(fail));
    });
    const categoryOf = (kind) =>
      kind === 'matching' ? { kind, term: document.getElementById('search').value } : { kind };
    document.getElementById('search').addEventListener('input', (event) => {
      const kind = document.getElementById('category').value;
      const action = kind === 'matching'
        ? { action: 'set_category', category: categoryOf(kind) }
        : { action: 'set_search', term: event.target.value };
      send(action).catch(fail);
    });
    document.getElementById('category').addEventListener('change', (event) => {
      send({ action: 'set_category', category: categoryOf(event.target.value) }).catch(fail);
    });
    document.querySelectorAll('[data-name-step]').forEach((button) => {
      const list = button.closest('[data-names]').dataset.names;
      button.addEventListener('click', () => send({ action: button.dataset.nameStep, list }).catch(fail));
    });
    document.getElementById('add-custom').addEventListener('click', () => {
      const input = document.getElementById('custom');
      send({ action: 'add_custom', text: input.value }).then(() => { input.value = ''; }).catch(fail);
    });
    document.getElementById('reset-all').addEventListener('click', () => {
      send({ action: 'reset_all' }).then(refreshStats).catch(fail);
    });
    document.getElementById('export').addEventListener('click', () => {
      window.location = `/api/sessions/${sessionId}/export`;
    });
    document.getElementById('import').addEventListener('click', async () => {
      const res = await fetch(`/api/sessions/${sessionId}/import`, {
        method: 'POST',
        headers: { 'content-type': 'text/plain' },
        body: document.getElementById('import-text').value
      });
      if (res.ok) render(await res.json());
    });
    document.getElementById('rows').addEventListener('click', () => refreshStats().catch(fail));
    document.getElementById('surah-select').addEventListener('change', (event) => loadSurah(event.target.value));
    document.getElementById('bookmark-surah').addEventListener('click', () => {
      if (currentSurah) send({ action: 'add_bookmark', name: currentSurah.bookmark_label }).catch(fail);
    });
    document.getElementById('clear-bookmarks').addEventListener('click', () => send({ action: 'clear_bookmarks' }).catch(fail));
    document.getElementById('dua-category').addEventListener('change', () => loadDuas());
    document.getElementById('get-times').addEventListener('click', async () => {
      const city = document.getElementById('city').value;
      const country = document.getElementById('country').value;
      const res = await fetch(`/api/prayer-times?city=${encodeURIComponent(city)}&country=${encodeURIComponent(country)}`);
      const target = document.getElementById('times');
      if (!res.ok) {
        target.replaceChildren();
        setStatus({ kind: res.status === 400 ? 'warning' : 'error', message: await res.text() });
        return;
      }
      const times = await res.json();
      target.replaceChildren(...times.timings.map((t) => el('div', `${t.prayer}: ${t.time}`, 'row')));
    });

    const start = async () => {
      const res = await fetch('/api/sessions', { method: 'POST' });
      sessionId = (await res.json()).id;
      await refreshStats();
      await Promise.all([loadDuas(), loadSurahs()]);
    };

    start().catch(fail);
  </script>
</body>
</html>
"#;
