use maud::{html, Markup, PreEscaped, DOCTYPE};

// Inlined so the report is a single self-contained file.
const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; margin: 0; }
header { display: flex; align-items: center; gap: 0.75rem; padding: 1rem 2rem; background: #fff; border-bottom: 1px solid #e5e7eb; }
header h1 { font-size: 1.5rem; margin: 0; }
header p { margin: 0; color: #4b5563; font-size: 0.875rem; }
main { max-width: 80rem; margin: 0 auto; padding: 2rem; }
.grid { display: grid; gap: 1.5rem; margin-bottom: 2rem; }
.grid-4 { grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(28rem, 1fr)); }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
.card { background: #fff; border: 1px solid #f3f4f6; border-radius: 0.75rem; padding: 1.5rem; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
.stat-title { font-size: 0.875rem; color: #4b5563; margin: 0 0 0.25rem; }
.stat-value { font-size: 1.5rem; font-weight: 700; }
.stat-subtitle { font-size: 0.875rem; color: #6b7280; margin: 0.25rem 0 0; }
.chart-card h2 { font-size: 1.125rem; margin: 0; }
.chart-subtitle { color: #6b7280; font-size: 0.875rem; margin: 0.25rem 0 1rem; }
.bar-row { margin-bottom: 0.75rem; }
.bar-labels { display: flex; justify-content: space-between; font-size: 0.875rem; margin-bottom: 0.25rem; }
.bar-track { background: #e5e7eb; border-radius: 9999px; height: 0.625rem; }
.bar-fill { height: 0.625rem; border-radius: 9999px; }
.donut { display: flex; align-items: center; gap: 1.5rem; }
.donut-total { font-size: 1.5rem; font-weight: 700; }
.donut-caption { font-size: 0.75rem; fill: #6b7280; }
.legend { list-style: none; padding: 0; font-size: 0.75rem; }
.legend li { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.5rem; }
.swatch { width: 0.75rem; height: 0.75rem; border-radius: 9999px; display: inline-block; }
.filters { display: flex; flex-wrap: wrap; gap: 1rem; }
.filters dt { font-size: 0.75rem; color: #6b7280; text-transform: uppercase; }
.filters dd { margin: 0; font-weight: 600; }
.empty { color: #6b7280; font-style: italic; }
footer { text-align: center; color: #9ca3af; font-size: 0.75rem; padding: 2rem; }
"#;

pub fn desktop_layout(title: &str, generated_at: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="32"
                        height="32"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#2563EB"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    div {
                        h1 { (title) }
                        p { "Affordable housing project listings" }
                    }
                }
                (content)
                footer { "Generated " (generated_at) }
            }
        }
    }
}
