//! HTML rendering of the start page.
//!
//! Rendering is a pure function of a [`PageState`] snapshot and the active
//! locale. The document has a static header (search form) and an `#app`
//! region holding the tab bar and the active section; state changes only
//! re-render `#app`.

use chrono::{Local, TimeZone};

use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::managers::history_manager::HistoryManagerTrait;
use crate::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
use crate::store::PageState;
use crate::types::view::ActiveTab;

const STYLES: &str = r#"
:root{--coral:#ff6f61;--sky:#4fb3ff;--mint:#3ccf9e;--yellow:#ffd166;--plum:#6b3e75;--fg:#1f2933;--muted:#5f6b7a;--card:rgba(255,255,255,.82);--radius:16px;--font:-apple-system,BlinkMacSystemFont,"Segoe UI","Noto Sans",Helvetica,Arial,sans-serif}
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:var(--font);color:var(--fg);min-height:100vh;background:linear-gradient(135deg,rgba(255,111,97,.1),rgba(79,179,255,.1),rgba(60,207,158,.1))}
.header{background:rgba(255,255,255,.8);backdrop-filter:blur(12px);border-bottom:1px solid rgba(0,0,0,.06);padding:16px}
.controls{display:flex;align-items:center;gap:16px;max-width:1200px;margin:0 auto}
.dots{display:flex;gap:8px}.dot{width:12px;height:12px;border-radius:50%}
.dot.coral{background:var(--coral)}.dot.yellow{background:var(--yellow)}.dot.mint{background:var(--mint)}
#search-form{flex:1;max-width:680px;margin:0 auto;position:relative}
#search-input{width:100%;height:48px;padding:0 64px 0 20px;font-size:17px;border-radius:var(--radius);border:2px solid #e5e7eb;background:rgba(255,255,255,.9);outline:none}
#search-input:focus{border-color:var(--coral)}
#search-submit{position:absolute;right:8px;top:50%;transform:translateY(-50%);background:var(--coral);color:#fff;border:0;border-radius:12px;padding:8px 14px;cursor:pointer}
#app{max-width:1200px;margin:0 auto;padding:16px 24px}
.tabs{display:flex;gap:4px;margin-bottom:24px}
.tab{border:0;background:transparent;border-radius:12px;padding:8px 14px;cursor:pointer;font-size:14px}
.tab.active[data-tab=home]{background:linear-gradient(90deg,var(--coral),var(--sky));color:#fff}
.tab.active[data-tab=bookmarks]{background:var(--mint);color:#fff}
.tab.active[data-tab=history]{background:var(--yellow);color:var(--plum)}
.hero{text-align:center;padding:64px 0}
.hero h1{font-size:56px;background:linear-gradient(90deg,var(--coral),var(--sky),var(--mint));-webkit-background-clip:text;color:transparent;margin-bottom:16px}
.hero p{font-size:19px;color:var(--muted);max-width:640px;margin:0 auto}
.features{display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:24px;margin-bottom:32px}
.card{background:var(--card);border-radius:var(--radius);padding:20px;box-shadow:0 1px 3px rgba(0,0,0,.06)}
.card h3{font-size:17px}.card p{font-size:13px;color:var(--muted)}
.badge{display:inline-block;margin-top:12px;border:1px solid currentColor;border-radius:999px;padding:2px 10px;font-size:12px}
.badge.coral{color:var(--coral)}.badge.sky{color:var(--sky)}.badge.mint{color:var(--mint)}
h2{font-size:28px;margin-bottom:20px}
.section-head{display:flex;align-items:center;justify-content:space-between}
.popular{display:grid;grid-template-columns:repeat(auto-fill,minmax(140px,1fr));gap:16px}
.site{text-align:center}.site .icon{width:48px;height:48px;border-radius:16px;margin:0 auto 10px;background:linear-gradient(135deg,var(--coral),var(--sky))}
.site h3{font-size:14px;white-space:nowrap;overflow:hidden;text-overflow:ellipsis}
.rows{display:grid;gap:16px}
.row{display:flex;align-items:center;justify-content:space-between}
.row .url,.row .meta{font-size:13px;color:var(--muted)}
.add{background:var(--mint);color:#fff;border:0;border-radius:12px;padding:8px 14px;cursor:pointer}
.remove{border:0;background:transparent;cursor:pointer;font-size:16px;opacity:0;transition:opacity .2s}
.row:hover .remove{opacity:1}
.count{font-size:13px;color:var(--muted);margin-bottom:12px}
"#;

const SCRIPT: &str = r#"
(function(){
  function post(cmd,data){
    var msg=Object.assign({cmd:cmd},data||{});
    if(window.ipc&&window.ipc.postMessage)window.ipc.postMessage(JSON.stringify(msg));
  }
  var form=document.getElementById('search-form');
  var input=document.getElementById('search-input');
  var app=document.getElementById('app');
  window.__sp_render=function(p){
    app.innerHTML=p.html;
    if(input.value!==p.query)input.value=p.query;
  };
  input.addEventListener('input',function(){post('set_query',{query:input.value})});
  form.addEventListener('submit',function(e){e.preventDefault();post('submit_search',{query:input.value})});
  app.addEventListener('click',function(e){
    var t=e.target.closest('[data-tab],[data-action],[data-remove]');
    if(!t)return;
    if(t.dataset.tab)post('select_tab',{tab:t.dataset.tab});
    else if(t.dataset.action==='add-bookmark')post('add_bookmark',{});
    else if(t.dataset.remove)post('remove_bookmark',{id:t.dataset.remove});
  });
  post('ui_ready');
})();
"#;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
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

/// Local wall-clock time of a millisecond timestamp, `HH:MM:SS`.
pub fn format_visit_time(visited_at_ms: i64) -> String {
    Local
        .timestamp_millis_opt(visited_at_ms)
        .single()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

/// A renderable view of one snapshot.
pub struct PageView<'a> {
    pub state: &'a PageState,
    pub locale: &'a LocalizationEngine,
    pub popular_sites_limit: usize,
}

impl<'a> PageView<'a> {
    pub fn new(state: &'a PageState, locale: &'a LocalizationEngine, popular_sites_limit: usize) -> Self {
        Self {
            state,
            locale,
            popular_sites_limit,
        }
    }

    fn t(&self, key: &str) -> String {
        escape_html(&self.locale.t(key, None))
    }

    /// The complete HTML document.
    pub fn document(&self) -> String {
        let app = self.app_html();
        let mut html = String::with_capacity(app.len() + STYLES.len() + SCRIPT.len() + 2048);
        html.push_str("<!DOCTYPE html><html lang=\"");
        html.push_str(self.locale.get_locale());
        html.push_str("\"><head><meta charset=\"UTF-8\"><title>");
        html.push_str(&self.t("app.title"));
        html.push_str("</title><style>");
        html.push_str(STYLES);
        html.push_str("</style></head><body>");
        html.push_str("<div class=\"header\"><div class=\"controls\">");
        html.push_str("<div class=\"dots\"><div class=\"dot coral\"></div><div class=\"dot yellow\"></div><div class=\"dot mint\"></div></div>");
        html.push_str(&format!(
            "<form id=\"search-form\"><input id=\"search-input\" type=\"text\" autocomplete=\"off\" placeholder=\"{}\" value=\"{}\"><button id=\"search-submit\" type=\"submit\">{}</button></form>",
            self.t("search.placeholder"),
            escape_html(&self.state.search_query),
            self.t("search.submit"),
        ));
        html.push_str("</div></div><div id=\"app\">");
        html.push_str(&app);
        html.push_str("</div><script>");
        html.push_str(SCRIPT);
        html.push_str("</script></body></html>");
        html
    }

    /// Inner HTML of `#app`: the tab bar and the active section only.
    pub fn app_html(&self) -> String {
        let mut html = self.tab_bar();
        html.push_str(&match self.state.active_tab {
            ActiveTab::Home => self.home_section(),
            ActiveTab::Bookmarks => self.bookmarks_section(),
            ActiveTab::History => self.history_section(),
        });
        html
    }

    /// JSON payload understood by `window.__sp_render`.
    pub fn render_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "html": self.app_html(),
            "query": self.state.search_query,
        })
    }

    fn tab_bar(&self) -> String {
        let mut html = String::from("<nav class=\"tabs\">");
        for tab in ActiveTab::ALL {
            let active = tab == self.state.active_tab;
            html.push_str(&format!(
                "<button class=\"tab{}\" data-tab=\"{}\" aria-selected=\"{}\">{}</button>",
                if active { " active" } else { "" },
                tab.as_str(),
                active,
                self.t(&format!("tabs.{}", tab.as_str())),
            ));
        }
        html.push_str("</nav>");
        html
    }

    fn home_section(&self) -> String {
        let mut html = String::from("<section data-section=\"home\">");
        html.push_str(&format!(
            "<div class=\"hero\"><h1>{}</h1><p>{}</p></div>",
            self.t("app.title"),
            self.t("app.tagline"),
        ));

        html.push_str("<div class=\"features\">");
        for (key, color) in [("smart_search", "coral"), ("sync", "sky"), ("privacy", "mint")] {
            html.push_str(&format!(
                "<div class=\"card\"><h3>{}</h3><p>{}</p><span class=\"badge {}\">{}</span></div>",
                self.t(&format!("home.{}", key)),
                self.t(&format!("home.{}_caption", key)),
                color,
                self.t(&format!("home.{}_badge", key)),
            ));
        }
        html.push_str("</div>");

        html.push_str(&format!("<h2>{}</h2><div class=\"popular\">", self.t("home.popular_sites")));
        for bookmark in self.state.bookmarks.popular(self.popular_sites_limit) {
            html.push_str(&format!(
                "<div class=\"card site\" data-id=\"{}\"><div class=\"icon\"></div><h3>{}</h3></div>",
                escape_html(&bookmark.id),
                escape_html(&bookmark.title),
            ));
        }
        html.push_str("</div></section>");
        html
    }

    fn bookmarks_section(&self) -> String {
        let bookmarks = self.state.bookmarks.list_bookmarks();
        let mut html = String::from("<section data-section=\"bookmarks\">");
        html.push_str(&format!(
            "<div class=\"section-head\"><h2>{}</h2><button class=\"add\" data-action=\"add-bookmark\">+ {}</button></div>",
            self.t("bookmarks.heading"),
            self.t("bookmarks.add"),
        ));
        html.push_str(&format!(
            "<p class=\"count\">{}</p><div class=\"rows\">",
            escape_html(&self.locale.plural("bookmarks.count", bookmarks.len() as u64, None)),
        ));
        let remove_label = self.t("bookmarks.remove");
        for bookmark in bookmarks {
            let id = escape_html(&bookmark.id);
            html.push_str(&format!(
                "<div class=\"card row\" data-id=\"{id}\"><div><h3>{}</h3><p class=\"url\">{}</p></div><button class=\"remove\" data-remove=\"{id}\" title=\"{remove_label}\">&#x2715;</button></div>",
                escape_html(&bookmark.title),
                escape_html(&bookmark.url),
            ));
        }
        html.push_str("</div></section>");
        html
    }

    fn history_section(&self) -> String {
        let mut html = String::from("<section data-section=\"history\">");
        html.push_str(&format!("<h2>{}</h2>", self.t("history.heading")));
        html.push_str(&format!(
            "<p class=\"count\">{}</p><div class=\"rows\">",
            escape_html(&self.locale.plural("history.count", self.state.history.len() as u64, None)),
        ));
        for item in self.state.history.entries() {
            html.push_str(&format!(
                "<div class=\"card row\" data-id=\"{}\"><div><h3>{}</h3><p class=\"meta\"><span class=\"url\">{}</span> &bull; <time>{}</time></p></div></div>",
                escape_html(&item.id),
                escape_html(&item.title),
                escape_html(&item.url),
                format_visit_time(item.visited_at),
            ));
        }
        html.push_str("</div></section>");
        html
    }
}
