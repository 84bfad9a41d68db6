use crate::domain::logic::{average_price, filter_commodities, latest_update, percent_change, trend, Trend};
use crate::domain::{AppState, HeroConfig, PriceData};
use crate::templates::components::{change_cell, format_naira, icon_glyph, trend_badge};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm {
    pub hero: HeroConfig,
    pub query: String,
    /// Region tab; `None` shows every region.
    pub selected_region: Option<String>,
    pub regions: Vec<String>,
    pub cards: Vec<CommodityCard>,
    pub is_admin: bool,
}

pub struct CommodityCard {
    pub id: String,
    pub name: String,
    pub glyph: &'static str,
    pub description: String,
    pub base_unit: String,
    pub average: f64,
    pub trend: Trend,
    pub percent_change: f64,
    pub latest_update: Option<String>,
    pub rows: Vec<PriceData>,
}

impl DashboardVm {
    /// Project the state through the search box and region tab.
    /// A region tab naming an unknown region falls back to all regions.
    pub fn build(state: &AppState, query: &str, region: Option<&str>, is_admin: bool) -> Self {
        let selected_region = region
            .filter(|r| state.has_region(r))
            .map(str::to_string);

        let cards = filter_commodities(&state.commodities, query)
            .into_iter()
            .map(|c| CommodityCard {
                id: c.id.clone(),
                name: c.name.clone(),
                glyph: icon_glyph(&c.icon),
                description: c.description.clone(),
                base_unit: c.base_unit.clone(),
                average: average_price(c),
                trend: trend(&c.history),
                percent_change: percent_change(&c.history),
                latest_update: latest_update(c).map(str::to_string),
                rows: c
                    .prices
                    .iter()
                    .filter(|p| selected_region.as_deref().map_or(true, |r| p.region == r))
                    .cloned()
                    .collect(),
            })
            .collect();

        Self {
            hero: state.hero.clone(),
            query: query.trim().to_string(),
            selected_region,
            regions: state.regions.clone(),
            cards,
            is_admin,
        }
    }

    fn tab_href(&self, region: Option<&str>) -> String {
        let mut params = url::form_urlencoded::Serializer::new(String::new());
        if !self.query.is_empty() {
            params.append_pair("q", &self.query);
        }
        if let Some(region) = region {
            params.append_pair("region", region);
        }
        let qs = params.finish();
        if qs.is_empty() {
            "/".to_string()
        } else {
            format!("/?{qs}")
        }
    }
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Prices",
        vm.is_admin,
        html! {
            section class="hero" {
                h1 { (vm.hero.headline) }
                p class="lead" { (vm.hero.subheading) }
                a href="#prices" class="button primary" { (vm.hero.cta_text) }
            }

            main class="container" id="prices" {
                form action="/" method="get" class="search" {
                    label for="q" class="sr-only" { "Search commodities" }
                    input type="search" id="q" name="q" value=(vm.query) placeholder="Search commodities…";
                    @if let Some(region) = &vm.selected_region {
                        input type="hidden" name="region" value=(region);
                    }
                    button type="submit" { "Search" }
                }

                nav class="tabs" {
                    a href=(vm.tab_href(None)) class=[vm.selected_region.is_none().then_some("active")] { "All regions" }
                    @for region in &vm.regions {
                        a href=(vm.tab_href(Some(region.as_str())))
                          class=[(vm.selected_region.as_deref() == Some(region.as_str())).then_some("active")]
                        { (region) }
                    }
                }

                @if vm.cards.is_empty() {
                    p class="empty" { "No commodities match “" (vm.query) "”." }
                }

                div class="grid" {
                    @for card in &vm.cards {
                        (commodity_card(card))
                    }
                }
            }
        },
    )
}

fn commodity_card(card: &CommodityCard) -> Markup {
    html! {
        article class="card commodity" id=(card.id) {
            header {
                span class="glyph" aria-hidden="true" { (card.glyph) }
                h3 { a href=(format!("/commodities/{}", card.id)) { (card.name) } }
                (trend_badge(card.trend, card.percent_change))
            }
            p class="muted" { (card.description) }
            p class="average" {
                @if card.average > 0.0 {
                    strong { (format_naira(card.average)) }
                    " avg / " (card.base_unit)
                } @else {
                    "No prices yet"
                }
            }
            table class="prices" {
                thead {
                    tr { th { "Region" } th { "Price" } th { "Change" } th { "Updated" } }
                }
                tbody {
                    @for row in &card.rows {
                        tr {
                            td { (row.region) }
                            td {
                                @if row.has_data() {
                                    (format_naira(row.price)) " / " (row.unit)
                                } @else {
                                    span class="muted" { "—" }
                                }
                            }
                            td { (change_cell(row.change)) }
                            td class="muted" { (row.last_updated) }
                        }
                    }
                }
            }
            @if let Some(date) = &card.latest_update {
                p class="muted small" { "Last update " (date) }
            }
        }
    }
}
