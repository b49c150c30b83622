use crate::models::SourceFile;

/// A URL pattern and the view that renders one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub url: String,
    pub view_name: String,
    /// Template name as Django's loader sees it.
    pub template: String,
}

impl Route {
    pub fn new(content_app: &str, file: &SourceFile) -> Self {
        let url = file.relative_url().to_string();
        Self {
            view_name: view_name(&url),
            template: format!("{content_app}/spellbook_md/{url}.html"),
            url,
        }
    }
}

/// `view_` followed by the URL with `/` and `.` turned into `_`.
pub fn view_name(url: &str) -> String {
    format!("view_{}", url.replace(['/', '.'], "_"))
}

pub fn render_urls(routes: &[Route]) -> String {
    let patterns: Vec<String> = routes
        .iter()
        .map(|r| {
            format!(
                "path('{}', views.{}, name='{}')",
                r.url, r.view_name, r.view_name
            )
        })
        .collect();
    format!(
        "from django.urls import path\nfrom . import views\n\nurlpatterns = [\n    {}\n]\n",
        patterns.join(",\n    ")
    )
}

pub fn render_views(routes: &[Route]) -> String {
    let mut out = String::from("from django.shortcuts import render\n");
    for r in routes {
        out.push_str(&format!(
            "\n\ndef {}(request):\n    return render(request, '{}')\n",
            r.view_name, r.template
        ));
    }
    out
}
