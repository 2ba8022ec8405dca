//! Channel form schema
//!
//! Mirrors the fields the admin panel renders for a channel: the base channel
//! fields, the code field that is only editable while creating, and the
//! store settings (currencies, locales, taxes, checkout shortcuts).

use admin_ui::{Choice, FieldKind, FormField, FormSchema};

use crate::channel::ChannelType;

pub const BLOCK_PREFIX: &str = "sylius_channel";

/// Default tax calculation strategies, in the order the select box lists them
pub const TAX_CALCULATION_STRATEGIES: [(&str, &str); 2] = [
    ("order_items_based", "Order items based"),
    ("order_item_units_based", "Order item units based"),
];

fn entity(resource: &str, multiple: bool) -> FieldKind {
    FieldKind::Entity {
        resource: resource.to_string(),
        multiple,
    }
}

/// Schema of the create/update channel form
pub fn channel_form_schema() -> FormSchema {
    let types = ChannelType::ALL
        .iter()
        .map(|t| Choice::new(t.label(), t.as_str()))
        .collect();
    let strategies = TAX_CALCULATION_STRATEGIES
        .iter()
        .map(|(value, label)| Choice::new(*label, *value))
        .collect();

    FormSchema::new(BLOCK_PREFIX)
        .add(
            FormField::new("code", "code", FieldKind::Text)
                .required()
                .locked_on_update(),
        )
        .add(FormField::new("name", "name", FieldKind::Text).required())
        .add(FormField::new("description", "description", FieldKind::Textarea))
        .add(FormField::new(
            "enabled",
            "enabled",
            FieldKind::Checkbox { default: true },
        ))
        .add(FormField::new("hostname", "hostname", FieldKind::Text))
        .add(FormField::new("color", "color", FieldKind::Color))
        .add(FormField::new(
            "type",
            "type",
            FieldKind::Choice {
                choices: types,
                placeholder: true,
            },
        ))
        .add(FormField::new("contact_email", "contactEmail", FieldKind::Email))
        .add(
            FormField::new("base_currency", "baseCurrency", entity("currency", false))
                .required()
                .locked_on_update(),
        )
        .add(
            FormField::new("default_locale", "defaultLocale", entity("locale", false)).required(),
        )
        .add(FormField::new("locales", "locales", entity("locale", true)))
        .add(FormField::new("currencies", "currencies", entity("currency", true)))
        .add(FormField::new(
            "default_tax_zone",
            "defaultTaxZone",
            entity("zone", false),
        ))
        .add(FormField::new(
            "tax_calculation_strategy",
            "taxCalculationStrategy",
            FieldKind::Choice {
                choices: strategies,
                placeholder: false,
            },
        ))
        .add(FormField::new(
            "skipping_shipping_step_allowed",
            "skippingShippingStepAllowed",
            FieldKind::Checkbox { default: false },
        ))
        .add(FormField::new(
            "skipping_payment_step_allowed",
            "skippingPaymentStepAllowed",
            FieldKind::Checkbox { default: false },
        ))
}
