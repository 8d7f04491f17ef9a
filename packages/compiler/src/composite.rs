//! Pricing table and tabs compilation.

use crate::common::{compile_advanced, compile_typography, fmt_px};
use crate::output::{ChildHint, CompiledBlock};
use pagecraft_schema::{Breakpoint, Link, PricingTableContent, TabsContent};

pub fn compile_pricing_table(content: &PricingTableContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("div");

    out.push("display", "grid");
    out.push(
        "grid-template-columns",
        format!("repeat({}, minmax(0, 1fr))", content.columns.resolve(bp)),
    );
    out.push("gap", fmt_px(*content.gap.resolve(bp)));
    compile_advanced(&content.advanced, bp, &mut out);

    for plan in &content.plans {
        let mut card = ChildHint::new("div");
        if plan.highlighted {
            card.push("border-color", content.accent_color.clone());
            card.push("border-width", "2px");
            card.push("border-style", "solid");
        }

        card.children
            .push(ChildHint::with_text("h3", plan.title.clone()));

        let mut price = ChildHint::with_text("div", format!("{}{}", plan.price, plan.period));
        if plan.highlighted {
            price.push("color", content.accent_color.clone());
        }
        card.children.push(price);

        let mut features = ChildHint::new("ul");
        for feature in &plan.features {
            features
                .children
                .push(ChildHint::with_text("li", feature.clone()));
        }
        card.children.push(features);

        let mut cta = ChildHint::with_text("a", plan.cta_text.clone());
        cta.link = Some(Link {
            url: plan.cta_url.clone(),
            open_in_new_tab: false,
            nofollow: false,
        });
        cta.push("background", content.accent_color.clone());
        card.children.push(cta);

        out.hints.children.push(card);
    }

    out
}

pub fn compile_tabs(content: &TabsContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("div");

    out.push("--pc-tab-active", content.active_color.clone());
    compile_typography(&content.typography, bp, &mut out);
    compile_advanced(&content.advanced, bp, &mut out);

    let mut strip = ChildHint::new("div");
    strip.attributes
        .push(("role".to_string(), "tablist".to_string()));
    for (index, item) in content.items.iter().enumerate() {
        let mut tab = ChildHint::with_text("button", item.title.clone());
        tab.attributes
            .push(("role".to_string(), "tab".to_string()));
        tab.attributes
            .push(("data-tab-index".to_string(), index.to_string()));
        strip.children.push(tab);
    }
    out.hints.children.push(strip);

    for (index, item) in content.items.iter().enumerate() {
        let mut panel = ChildHint::with_text("div", item.body.clone());
        panel
            .attributes
            .push(("role".to_string(), "tabpanel".to_string()));
        panel
            .attributes
            .push(("data-tab-index".to_string(), index.to_string()));
        out.hints.children.push(panel);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_schema::{WidgetContent, WidgetType};

    #[test]
    fn test_pricing_plans_become_child_cards() {
        let WidgetContent::PricingTable(t) =
            WidgetContent::default_for(WidgetType::PricingTable)
        else {
            panic!("expected pricing defaults");
        };

        let out = compile_pricing_table(&t, Breakpoint::Desktop);
        assert_eq!(out.hints.children.len(), t.plans.len());

        // Default "Pro" plan is highlighted and picks up the accent border.
        let pro = &out.hints.children[1];
        assert!(pro
            .declarations
            .iter()
            .any(|d| d.property == "border-color" && d.value == t.accent_color));

        // Feature list renders as a ul of li children.
        let features = pro.children.iter().find(|c| c.tag == "ul").unwrap();
        assert_eq!(features.children.len(), t.plans[1].features.len());
    }

    #[test]
    fn test_pricing_columns_collapse_on_mobile() {
        let WidgetContent::PricingTable(t) =
            WidgetContent::default_for(WidgetType::PricingTable)
        else {
            panic!("expected pricing defaults");
        };

        let out = compile_pricing_table(&t, Breakpoint::Mobile);
        assert_eq!(
            out.get("grid-template-columns"),
            Some("repeat(1, minmax(0, 1fr))")
        );
    }

    #[test]
    fn test_tabs_emit_strip_and_panels() {
        let WidgetContent::Tabs(t) = WidgetContent::default_for(WidgetType::Tabs) else {
            panic!("expected tabs defaults");
        };

        let out = compile_tabs(&t, Breakpoint::Desktop);
        assert_eq!(out.get("--pc-tab-active"), Some(t.active_color.as_str()));

        let strip = &out.hints.children[0];
        assert_eq!(strip.children.len(), t.items.len());
        // One panel per tab after the strip.
        assert_eq!(out.hints.children.len(), 1 + t.items.len());
    }
}
