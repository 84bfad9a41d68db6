use crate::domain::logic::{average_price, percent_change, trend};
use crate::domain::Commodity;
use crate::templates::components::{change_cell, format_naira, icon_glyph, trend_badge};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn commodity_page(commodity: &Commodity, is_admin: bool) -> Markup {
    let average = average_price(commodity);
    // Widest bar in the history strip.
    let peak = commodity
        .history
        .iter()
        .map(|p| p.price)
        .fold(0.0_f64, f64::max);

    desktop_layout(
        &commodity.name,
        is_admin,
        html! {
            main class="container" {
                p { a href="/" { "← All prices" } }
                h1 {
                    span class="glyph" aria-hidden="true" { (icon_glyph(&commodity.icon)) }
                    " " (commodity.name)
                }
                p class="lead" { (commodity.description) }

                section class="card" {
                    h3 { "Overview" }
                    p {
                        "Average across reporting regions: "
                        strong {
                            @if average > 0.0 { (format_naira(average)) " / " (commodity.base_unit) }
                            @else { "no data yet" }
                        }
                    }
                    p { "Trend since " (commodity.history.first().map(|p| p.date.as_str()).unwrap_or("-")) ": "
                        (trend_badge(trend(&commodity.history), percent_change(&commodity.history)))
                    }
                }

                section class="card" {
                    h3 { "Price history" }
                    table class="history" {
                        thead { tr { th { "Period" } th { "Price" } th {} } }
                        tbody {
                            @for point in &commodity.history {
                                tr {
                                    td { (point.date) }
                                    td { (format_naira(point.price)) }
                                    td {
                                        @if peak > 0.0 {
                                            span class="bar" style=(format!("width: {:.0}%", point.price / peak * 100.0)) {}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                section class="card" {
                    h3 { "By region" }
                    table class="prices" {
                        thead { tr { th { "Region" } th { "Price" } th { "Unit" } th { "Change" } th { "Updated" } } }
                        tbody {
                            @for row in &commodity.prices {
                                tr {
                                    td { (row.region) }
                                    td {
                                        @if row.has_data() { (format_naira(row.price)) }
                                        @else { span class="muted" { "—" } }
                                    }
                                    td { (row.unit) }
                                    td { (change_cell(row.change)) }
                                    td class="muted" { (row.last_updated) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
