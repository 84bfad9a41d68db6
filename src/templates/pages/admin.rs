use crate::domain::AppState;
use crate::templates::components::{format_naira, icon_glyph};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct AdminVm<'a> {
    pub state: &'a AppState,
}

pub fn admin_page(vm: &AdminVm) -> Markup {
    let state = vm.state;

    desktop_layout(
        "Admin",
        true,
        html! {
            main class="container" {
                h1 { "Admin Dashboard" }

                div class="admin-grid" {
                    (price_card(state))
                    (bulk_card(state))
                }

                (commodities_card(state))

                div class="admin-grid" {
                    (hero_card(state))
                    (regions_card(state))
                }

                div class="admin-grid" {
                    (activity_card(state))
                    (users_card(state))
                }
            }
        },
    )
}

fn commodity_options(state: &AppState) -> Markup {
    html! {
        @for c in &state.commodities {
            option value=(c.id) { (c.name) }
        }
    }
}

fn price_card(state: &AppState) -> Markup {
    html! {
        div class="card" {
            h3 { "Update a price" }
            form action="/admin/prices" method="post" class="stack" {
                label for="price-commodity" { "Commodity" }
                select id="price-commodity" name="commodity_id" required {
                    (commodity_options(state))
                }
                label for="price-region" { "Region" }
                select id="price-region" name="region" required {
                    @for region in &state.regions {
                        option value=(region) { (region) }
                    }
                }
                label for="price-value" { "Price (₦)" }
                input id="price-value" type="number" name="price" min="0" step="any" required;
                label for="price-unit" { "Unit" }
                input id="price-unit" type="text" name="unit" placeholder="e.g. 100kg bag" required;
                label for="price-change" { "Change % (optional)" }
                input id="price-change" type="number" name="change" step="any";
                button type="submit" class="primary" { "Save price" }
            }
        }
    }
}

fn bulk_card(state: &AppState) -> Markup {
    html! {
        div class="card" {
            h3 { "Bulk update" }
            p class="muted small" {
                "One region per line: " code { "region, price, unit[, change]" }
                ". If any line is invalid nothing is saved."
            }
            form action="/admin/bulk" method="post" class="stack" {
                label for="bulk-commodity" { "Commodity" }
                select id="bulk-commodity" name="commodity_id" required {
                    (commodity_options(state))
                }
                label for="bulk-lines" { "Prices" }
                textarea id="bulk-lines" name="lines" rows="7" required
                    placeholder="Lagos, 45000, 25L keg\nKano, 42000, 25L keg, 1.5" {}
                button type="submit" class="primary" { "Apply bulk update" }
            }
        }
    }
}

fn commodities_card(state: &AppState) -> Markup {
    html! {
        div class="card" style="margin-bottom: 2rem;" {
            h3 { "Commodity details" }
            p class="muted small" { "Blank fields are left unchanged." }
            div style="overflow-x: auto;" {
                table class="admin-table" {
                    thead {
                        tr {
                            th { "" }
                            th { "Name" }
                            th { "Icon" }
                            th { "Base unit" }
                            th { "Description" }
                            th { "Avg" }
                            th { "" }
                        }
                    }
                    tbody {
                        @for c in &state.commodities {
                            @let form_id = format!("commodity-{}", c.id);
                            tr {
                                td { (icon_glyph(&c.icon)) }
                                td { input form=(form_id) type="text" name="name" placeholder=(c.name); }
                                td { input form=(form_id) type="text" name="icon" placeholder=(c.icon) size="8"; }
                                td { input form=(form_id) type="text" name="base_unit" placeholder=(c.base_unit) size="10"; }
                                td { input form=(form_id) type="text" name="description" placeholder=(c.description); }
                                td class="muted" { (format_naira(crate::domain::logic::average_price(c))) }
                                td {
                                    form id=(form_id) action=(format!("/admin/commodities/{}", c.id)) method="post" style="margin: 0;" {
                                        button type="submit" { "Update" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn hero_card(state: &AppState) -> Markup {
    html! {
        div class="card" {
            h3 { "Hero section" }
            form action="/admin/hero" method="post" class="stack" {
                label for="hero-headline" { "Headline" }
                input id="hero-headline" type="text" name="headline" value=(state.hero.headline);
                label for="hero-subheading" { "Subheading" }
                textarea id="hero-subheading" name="subheading" rows="3" { (state.hero.subheading) }
                label for="hero-cta" { "Button text" }
                input id="hero-cta" type="text" name="cta_text" value=(state.hero.cta_text);
                button type="submit" class="primary" { "Save hero" }
            }
        }
    }
}

fn regions_card(state: &AppState) -> Markup {
    html! {
        div class="card" {
            h3 { "Regions" }
            ul class="region-list" {
                @for region in &state.regions {
                    li {
                        span { (region) }
                        form action="/admin/regions/remove" method="post"
                            onsubmit="return confirm('Remove this region and its prices for every commodity?');"
                            style="margin: 0;"
                        {
                            input type="hidden" name="region" value=(region);
                            button type="submit" class="danger link" { "Remove" }
                        }
                    }
                }
            }
            form action="/admin/regions" method="post" class="inline" {
                label for="new-region" class="sr-only" { "New region" }
                input id="new-region" type="text" name="region" placeholder="New region" required;
                button type="submit" { "Add region" }
            }
        }
    }
}

fn activity_card(state: &AppState) -> Markup {
    html! {
        div class="card" {
            h3 { "Recent activity" }
            @if state.activity_log.is_empty() {
                p class="muted" { "Nothing yet." }
            } @else {
                ol class="activity" {
                    @for entry in &state.activity_log {
                        li {
                            span class="muted small" { (entry.timestamp) }
                            " "
                            (entry.action)
                        }
                    }
                }
            }
        }
    }
}

fn users_card(state: &AppState) -> Markup {
    html! {
        div class="card" {
            h3 { "Users" }
            table class="admin-table" {
                thead {
                    tr { th { "Username" } th { "Role" } th { "Created" } }
                }
                tbody {
                    @for user in &state.users {
                        tr {
                            td { (user.username) }
                            td { span class="pill" { (user.role.label()) } }
                            td class="muted" { (user.created_at) }
                        }
                    }
                }
            }
        }
    }
}
