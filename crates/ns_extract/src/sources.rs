use scraper::{Html, Selector};

/// How article links are picked out of a search-results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Google News: relative `./articles/...` hrefs under the news host.
    GoogleNews,
    /// Everything else: relative `/article/` paths or absolute links that
    /// look like news stories.
    Generic,
}

/// One search endpoint queried for company coverage.
#[derive(Debug, Clone)]
pub struct SearchSource {
    pub name: &'static str,
    pub template: &'static str,
    pub style: LinkStyle,
}

pub fn default_sources() -> Vec<SearchSource> {
    vec![
        SearchSource {
            name: "Google News",
            template: "https://news.google.com/search?q={}",
            style: LinkStyle::GoogleNews,
        },
        SearchSource {
            name: "Reuters",
            template: "https://www.reuters.com/search/news?blob={}",
            style: LinkStyle::Generic,
        },
        SearchSource {
            name: "BBC",
            template: "https://www.bbc.co.uk/search?q={}",
            style: LinkStyle::Generic,
        },
    ]
}

impl SearchSource {
    pub fn search_url(&self, company: &str) -> String {
        self.template.replace("{}", &company.replace(' ', "+"))
    }

    /// Pull candidate article URLs out of a fetched results page.
    pub fn extract_links(&self, html: &str, search_url: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let anchors = Selector::parse("a[href]").unwrap();

        let base_url = match self.style {
            LinkStyle::GoogleNews => "https://news.google.com".to_string(),
            LinkStyle::Generic => search_url
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/"),
        };

        let mut urls = Vec::new();
        for element in document.select(&anchors) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            match self.style {
                LinkStyle::GoogleNews => {
                    if let Some(path) = href.strip_prefix("./articles/") {
                        urls.push(format!("{}/articles/{}", base_url, path));
                    }
                }
                LinkStyle::Generic => {
                    if !href.contains("http") && href.contains("/article/") {
                        urls.push(format!("{}{}", base_url, href));
                    } else if href.contains("http")
                        && (href.contains("article") || href.contains("news"))
                    {
                        urls.push(href.to_string());
                    }
                }
            }
        }
        urls
    }
}
