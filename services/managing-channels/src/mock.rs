//! In-memory admin panel for running the channel steps without a browser
//!
//! Renders the channel index, create and update screens from the channel form
//! schema and applies the validation rules and flash messages of the real
//! panel, so the same page objects and steps run against it unchanged.

use std::collections::{BTreeMap, BTreeSet};

use admin_ui::{
    AdminUiError, FieldKind, FormField, FormSchema, GridRow, Locator, NotificationType, Route,
    SelectOption, UiDriver,
};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::channel::ChannelType;
use crate::config::AdminConfig;
use crate::form::channel_form_schema;
use crate::messages;
use crate::pages::{COLUMN_CODE, COLUMN_ENABLED, COLUMN_NAME, CREATE_BUTTON, SAVE_BUTTON};

pub const CURRENCIES: [(&str, &str); 3] = [
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound"),
];

pub const LOCALES: [(&str, &str); 3] = [
    ("en_US", "English (United States)"),
    ("pl_PL", "Polish (Poland)"),
    ("fr_FR", "French (France)"),
];

pub const ZONES: [(&str, &str); 2] = [("US", "United States"), ("EU", "European Union")];

const DELETE_LABEL: &str = "Delete";
const COLUMN_TYPE: &str = "type";

/// Submitted value of one form control
#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Text(String),
    Checked(bool),
    Selected(Vec<String>),
}

impl Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Text(text) => text.trim().is_empty(),
            Value::Checked(_) => false,
            Value::Selected(values) => values.is_empty(),
        }
    }

    fn as_text(&self) -> String {
        match self {
            Value::Text(text) => text.clone(),
            Value::Checked(true) => "1".to_string(),
            Value::Checked(false) => String::new(),
            Value::Selected(values) => values.first().cloned().unwrap_or_default(),
        }
    }
}

/// Form values keyed by schema key
type Values = BTreeMap<String, Value>;

#[derive(Debug, Clone)]
struct StoredChannel {
    id: u64,
    values: Values,
}

impl StoredChannel {
    fn text(&self, key: &str) -> String {
        self.values.get(key).map(Value::as_text).unwrap_or_default()
    }

    fn is_enabled(&self) -> bool {
        matches!(self.values.get("enabled"), Some(Value::Checked(true)))
    }

    fn grid_row(&self) -> GridRow {
        let name = self.text("name");
        let description = self.text("description");
        let name_and_description = if description.is_empty() {
            name
        } else {
            format!("{}\n{}", name, description)
        };
        let channel_type = self
            .text("type")
            .parse::<ChannelType>()
            .map(|t| t.label().to_string())
            .unwrap_or_default();
        let enabled = if self.is_enabled() { "Enabled" } else { "Disabled" };

        let mut row = GridRow::new();
        row.insert(COLUMN_CODE.to_string(), self.text("code"));
        row.insert(COLUMN_NAME.to_string(), name_and_description);
        row.insert(COLUMN_ENABLED.to_string(), enabled.to_string());
        row.insert(COLUMN_TYPE.to_string(), channel_type);
        row
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Blank,
    Index,
    Create,
    Update(u64),
}

#[derive(Debug, Clone)]
struct Flash {
    text: String,
    kind: NotificationType,
}

/// Deletion waiting for the confirmation modal
#[derive(Debug, Clone, Copy)]
enum PendingDelete {
    Row(usize),
    Checked,
}

#[derive(Debug)]
struct AdminState {
    channels: Vec<StoredChannel>,
    next_id: u64,
    screen: Screen,
    path: String,
    form: Values,
    errors: BTreeMap<String, String>,
    flash: Option<Flash>,
    checked_rows: BTreeSet<usize>,
    pending: Option<PendingDelete>,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            channels: Vec::new(),
            next_id: 1,
            screen: Screen::Blank,
            path: "/".to_string(),
            form: Values::new(),
            errors: BTreeMap::new(),
            flash: None,
            checked_rows: BTreeSet::new(),
            pending: None,
        }
    }
}

impl AdminState {
    fn channel(&self, id: u64) -> Option<&StoredChannel> {
        self.channels.iter().find(|c| c.id == id)
    }

    fn other_enabled(&self, id: Option<u64>) -> usize {
        self.channels
            .iter()
            .filter(|c| Some(c.id) != id && c.is_enabled())
            .count()
    }

    fn on_form(&self) -> bool {
        matches!(self.screen, Screen::Create | Screen::Update(_))
    }

    fn notify(&mut self, text: &str, kind: NotificationType) {
        debug!("Mock admin flash ({}): {}", kind, text);
        self.flash = Some(Flash {
            text: text.to_string(),
            kind,
        });
    }
}

/// Options a select field offers
fn options(field: &FormField) -> Vec<SelectOption> {
    let catalog: &[(&str, &str)] = match &field.kind {
        FieldKind::Choice { choices, .. } => {
            return choices
                .iter()
                .map(|c| SelectOption::new(c.value.clone(), c.label.clone()))
                .collect()
        }
        FieldKind::Entity { resource, .. } => match resource.as_str() {
            "currency" => &CURRENCIES[..],
            "locale" => &LOCALES[..],
            "zone" => &ZONES[..],
            _ => &[],
        },
        _ => &[],
    };
    catalog
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect()
}

/// Values of a freshly rendered create form
fn blank_values(schema: &FormSchema) -> Values {
    schema
        .fields()
        .iter()
        .map(|field| {
            let value = match &field.kind {
                FieldKind::Checkbox { default } => Value::Checked(*default),
                FieldKind::Choice {
                    choices,
                    placeholder: false,
                } => Value::Selected(choices.iter().take(1).map(|c| c.value.clone()).collect()),
                FieldKind::Choice { .. } | FieldKind::Entity { .. } => Value::Selected(Vec::new()),
                _ => Value::Text(String::new()),
            };
            (field.key.clone(), value)
        })
        .collect()
}

fn is_valid_code(code: &str) -> bool {
    code.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Add the single selection of `from` to the multi-select `key`
fn include(values: &mut Values, key: &str, from: &str) {
    let item = values.get(from).map(Value::as_text).unwrap_or_default();
    if item.is_empty() {
        return;
    }
    if let Some(Value::Selected(selected)) = values.get_mut(key) {
        if !selected.contains(&item) {
            selected.push(item);
        }
    }
}

/// Admin panel simulation implementing [`UiDriver`]
#[derive(Debug)]
pub struct MockAdmin {
    schema: FormSchema,
    index_route: Route,
    create_route: Route,
    update_route: Route,
    state: Mutex<AdminState>,
}

impl MockAdmin {
    pub fn new(admin: &AdminConfig) -> Self {
        Self {
            schema: channel_form_schema(),
            index_route: Route::new(admin.index_route()),
            create_route: Route::new(admin.create_route()),
            update_route: Route::new(admin.update_route()),
            state: Mutex::new(AdminState::default()),
        }
    }

    /// Number of stored channels
    pub async fn channel_count(&self) -> usize {
        self.state.lock().await.channels.len()
    }

    fn form_field(&self, state: &AdminState, locator: &Locator) -> admin_ui::Result<&FormField> {
        let id = match locator {
            Locator::Field(id) if state.on_form() => id,
            other => return Err(AdminUiError::ElementNotFound(other.to_string())),
        };
        self.schema
            .field_by_control_id(id)
            .ok_or_else(|| AdminUiError::ElementNotFound(locator.to_string()))
    }

    fn is_locked(&self, state: &AdminState, field: &FormField) -> bool {
        field.locked_on_update && matches!(state.screen, Screen::Update(_))
    }

    fn editable_field(&self, state: &AdminState, locator: &Locator) -> admin_ui::Result<FormField> {
        let field = self.form_field(state, locator)?;
        if self.is_locked(state, field) {
            return Err(AdminUiError::NotInteractable(format!("{} is disabled", locator)));
        }
        Ok(field.clone())
    }

    fn show(&self, state: &mut AdminState, screen: Screen) -> admin_ui::Result<()> {
        state.path = match screen {
            Screen::Blank => "/".to_string(),
            Screen::Index => self.index_route.path(&[])?,
            Screen::Create => self.create_route.path(&[])?,
            Screen::Update(id) => self.update_route.path(&[("id", id.to_string().as_str())])?,
        };
        state.form = match screen {
            Screen::Create => blank_values(&self.schema),
            Screen::Update(id) => state
                .channel(id)
                .map(|c| c.values.clone())
                .unwrap_or_default(),
            Screen::Blank | Screen::Index => Values::new(),
        };
        state.screen = screen;
        state.errors.clear();
        state.checked_rows.clear();
        state.pending = None;
        Ok(())
    }

    /// Field-level validation of the submitted form
    fn validate(&self, state: &AdminState, values: &Values, id: Option<u64>) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();

        for field in self.schema.fields() {
            if field.required && values.get(&field.key).map_or(true, Value::is_blank) {
                errors.insert(field.key.clone(), messages::required(&field.label));
            }
        }

        if id.is_none() && !errors.contains_key("code") {
            let code = values.get("code").map(Value::as_text).unwrap_or_default();
            if state.channels.iter().any(|c| c.text("code") == code) {
                errors.insert("code".to_string(), messages::CODE_NOT_UNIQUE.to_string());
            } else if !is_valid_code(&code) {
                errors.insert("code".to_string(), messages::CODE_INVALID.to_string());
            }
        }

        let enabled = matches!(values.get("enabled"), Some(Value::Checked(true)));
        if !enabled && state.other_enabled(id) == 0 {
            errors.insert(
                "enabled".to_string(),
                messages::AT_LEAST_ONE_ENABLED.to_string(),
            );
        }

        if id.is_some() && !errors.contains_key("default_locale") {
            let default_locale = values
                .get("default_locale")
                .map(Value::as_text)
                .unwrap_or_default();
            let enabled_locales = match values.get("locales") {
                Some(Value::Selected(locales)) => locales.clone(),
                _ => Vec::new(),
            };
            if !enabled_locales.contains(&default_locale) {
                errors.insert(
                    "default_locale".to_string(),
                    messages::DEFAULT_LOCALE_NOT_ENABLED.to_string(),
                );
            }
        }

        errors
    }

    fn submit_create(&self, state: &mut AdminState) -> admin_ui::Result<()> {
        let mut values = state.form.clone();
        let errors = self.validate(state, &values, None);
        if !errors.is_empty() {
            debug!("Mock admin rejected new channel: {:?}", errors);
            state.errors = errors;
            return Ok(());
        }

        include(&mut values, "locales", "default_locale");
        include(&mut values, "currencies", "base_currency");

        let id = state.next_id;
        state.next_id += 1;
        state.channels.push(StoredChannel { id, values });
        debug!("Mock admin created channel {}", id);

        self.show(state, Screen::Update(id))?;
        state.notify(messages::CREATED, NotificationType::Success);
        Ok(())
    }

    fn submit_update(&self, state: &mut AdminState, id: u64) -> admin_ui::Result<()> {
        let stored = state
            .channel(id)
            .cloned()
            .ok_or_else(|| AdminUiError::InvalidRoute(format!("channel {} no longer exists", id)))?;

        // disabled controls are not submitted
        let mut values = state.form.clone();
        for field in self.schema.fields().iter().filter(|f| f.locked_on_update) {
            if let Some(value) = stored.values.get(&field.key) {
                values.insert(field.key.clone(), value.clone());
            }
        }

        let errors = self.validate(state, &values, Some(id));
        if !errors.is_empty() {
            debug!("Mock admin rejected changes to channel {}: {:?}", id, errors);
            state.form = values;
            state.errors = errors;
            return Ok(());
        }

        if let Some(channel) = state.channels.iter_mut().find(|c| c.id == id) {
            channel.values = values;
        }
        self.show(state, Screen::Update(id))?;
        state.notify(messages::UPDATED, NotificationType::Success);
        Ok(())
    }

    fn confirm_delete(&self, state: &mut AdminState, pending: PendingDelete) -> admin_ui::Result<()> {
        let rows: BTreeSet<usize> = match pending {
            PendingDelete::Row(row) => BTreeSet::from([row]),
            PendingDelete::Checked => state.checked_rows.clone(),
        };
        let doomed: Vec<u64> = state
            .channels
            .iter()
            .enumerate()
            .filter(|(row, _)| rows.contains(row))
            .map(|(_, c)| c.id)
            .collect();

        if doomed.is_empty() {
            debug!("Mock admin has no channels selected for deletion");
            return self.show(state, Screen::Index);
        }

        let removes_enabled = state
            .channels
            .iter()
            .any(|c| doomed.contains(&c.id) && c.is_enabled());
        let remaining_enabled = state
            .channels
            .iter()
            .filter(|c| !doomed.contains(&c.id) && c.is_enabled())
            .count();

        self.show(state, Screen::Index)?;
        if removes_enabled && remaining_enabled == 0 {
            debug!("Mock admin refused to delete channels {:?}", doomed);
            state.notify(messages::CANNOT_DELETE, NotificationType::Failure);
            return Ok(());
        }

        state.channels.retain(|c| !doomed.contains(&c.id));
        let message = match pending {
            PendingDelete::Row(_) => messages::DELETED,
            PendingDelete::Checked => messages::BULK_DELETED,
        };
        state.notify(message, NotificationType::Success);
        Ok(())
    }

    fn is_present_in(&self, state: &AdminState, locator: &Locator) -> bool {
        let rows = state.channels.len();
        match locator {
            Locator::Field(_) => self.form_field(state, locator).is_ok(),
            Locator::ValidationError(id) => self
                .schema
                .field_by_control_id(id)
                .is_some_and(|f| state.on_form() && state.errors.contains_key(&f.key)),
            Locator::Button(label) => match state.screen {
                Screen::Create => label == CREATE_BUTTON,
                Screen::Update(_) => label == SAVE_BUTTON,
                _ => false,
            },
            Locator::RowCheckbox(row) => state.screen == Screen::Index && *row < rows,
            Locator::RowButton { row, label } => {
                state.screen == Screen::Index && *row < rows && label == DELETE_LABEL
            }
            Locator::BulkAction(label) => state.screen == Screen::Index && label == DELETE_LABEL,
            Locator::ConfirmButton => state.pending.is_some(),
            Locator::FlashMessage | Locator::FlashClose => state.flash.is_some(),
        }
    }

    fn require(&self, state: &AdminState, locator: &Locator) -> admin_ui::Result<()> {
        if self.is_present_in(state, locator) {
            Ok(())
        } else {
            Err(AdminUiError::ElementNotFound(locator.to_string()))
        }
    }
}

#[async_trait]
impl UiDriver for MockAdmin {
    async fn visit(&self, path: &str) -> admin_ui::Result<()> {
        debug!("Mock admin visiting {}", path);
        let mut state = self.state.lock().await;

        let screen = if self.index_route.matches(path) {
            Screen::Index
        } else if self.create_route.matches(path) {
            Screen::Create
        } else {
            let id = self
                .update_route
                .param(path, "id")
                .and_then(|id| id.parse::<u64>().ok())
                .filter(|id| state.channel(*id).is_some())
                .ok_or_else(|| AdminUiError::InvalidRoute(format!("nothing is served at {}", path)))?;
            Screen::Update(id)
        };

        self.show(&mut state, screen)?;
        state.flash = None;
        Ok(())
    }

    async fn current_path(&self) -> admin_ui::Result<String> {
        Ok(self.state.lock().await.path.clone())
    }

    async fn fill(&self, locator: &Locator, value: &str) -> admin_ui::Result<()> {
        let mut state = self.state.lock().await;
        let field = self.editable_field(&state, locator)?;
        if field.kind.is_select() || matches!(field.kind, FieldKind::Checkbox { .. }) {
            return Err(AdminUiError::NotInteractable(format!(
                "{} does not accept text",
                locator
            )));
        }
        state.form.insert(field.key, Value::Text(value.to_string()));
        Ok(())
    }

    async fn select_option(&self, locator: &Locator, option: &str) -> admin_ui::Result<()> {
        let mut state = self.state.lock().await;
        let field = self.editable_field(&state, locator)?;
        if !field.kind.is_select() {
            return Err(AdminUiError::NotInteractable(format!("{} is not a select box", locator)));
        }

        let selected = if option.is_empty() {
            if matches!(field.kind, FieldKind::Choice { placeholder: false, .. }) {
                return Err(AdminUiError::ElementNotFound(format!(
                    "placeholder option of {}",
                    locator
                )));
            }
            Vec::new()
        } else {
            let choice = options(&field)
                .into_iter()
                .find(|o| o.matches(option))
                .ok_or_else(|| {
                    AdminUiError::ElementNotFound(format!("option \"{}\" of {}", option, locator))
                })?;
            vec![choice.value]
        };
        state.form.insert(field.key, Value::Selected(selected));
        Ok(())
    }

    async fn add_option(&self, locator: &Locator, option: &str) -> admin_ui::Result<()> {
        let mut state = self.state.lock().await;
        let field = self.editable_field(&state, locator)?;
        if !field.kind.is_multiple() {
            return Err(AdminUiError::NotInteractable(format!(
                "{} is not a multi-select",
                locator
            )));
        }
        let choice = options(&field)
            .into_iter()
            .find(|o| o.matches(option))
            .ok_or_else(|| {
                AdminUiError::ElementNotFound(format!("option \"{}\" of {}", option, locator))
            })?;

        match state.form.get_mut(&field.key) {
            Some(Value::Selected(selected)) => {
                if !selected.contains(&choice.value) {
                    selected.push(choice.value);
                }
            }
            _ => {
                state
                    .form
                    .insert(field.key, Value::Selected(vec![choice.value]));
            }
        }
        Ok(())
    }

    async fn set_checked(&self, locator: &Locator, checked: bool) -> admin_ui::Result<()> {
        let mut state = self.state.lock().await;
        if let Locator::RowCheckbox(row) = locator {
            self.require(&state, locator)?;
            if checked {
                state.checked_rows.insert(*row);
            } else {
                state.checked_rows.remove(row);
            }
            return Ok(());
        }

        let field = self.editable_field(&state, locator)?;
        if !matches!(field.kind, FieldKind::Checkbox { .. }) {
            return Err(AdminUiError::NotInteractable(format!("{} is not a checkbox", locator)));
        }
        state.form.insert(field.key, Value::Checked(checked));
        Ok(())
    }

    async fn click(&self, locator: &Locator) -> admin_ui::Result<()> {
        let mut state = self.state.lock().await;
        self.require(&state, locator)?;

        match (locator, state.screen) {
            (Locator::Button(_), Screen::Create) => self.submit_create(&mut state),
            (Locator::Button(_), Screen::Update(id)) => self.submit_update(&mut state, id),
            (Locator::RowButton { row, .. }, _) => {
                state.pending = Some(PendingDelete::Row(*row));
                Ok(())
            }
            (Locator::BulkAction(_), _) => {
                state.pending = Some(PendingDelete::Checked);
                Ok(())
            }
            (Locator::ConfirmButton, _) => match state.pending.take() {
                Some(pending) => self.confirm_delete(&mut state, pending),
                None => Err(AdminUiError::ElementNotFound(locator.to_string())),
            },
            (Locator::FlashClose, _) => {
                state.flash = None;
                Ok(())
            }
            _ => Err(AdminUiError::NotInteractable(locator.to_string())),
        }
    }

    async fn is_present(&self, locator: &Locator) -> admin_ui::Result<bool> {
        let state = self.state.lock().await;
        Ok(self.is_present_in(&state, locator))
    }

    async fn is_disabled(&self, locator: &Locator) -> admin_ui::Result<bool> {
        let state = self.state.lock().await;
        let field = self.form_field(&state, locator)?;
        Ok(self.is_locked(&state, field))
    }

    async fn value(&self, locator: &Locator) -> admin_ui::Result<String> {
        let state = self.state.lock().await;
        let field = self.form_field(&state, locator)?;
        Ok(state
            .form
            .get(&field.key)
            .map(Value::as_text)
            .unwrap_or_default())
    }

    async fn selected_options(&self, locator: &Locator) -> admin_ui::Result<Vec<SelectOption>> {
        let state = self.state.lock().await;
        let field = self.form_field(&state, locator)?;
        let selected = match state.form.get(&field.key) {
            Some(Value::Selected(selected)) => selected.clone(),
            _ => {
                return Err(AdminUiError::NotInteractable(format!(
                    "{} is not a select box",
                    locator
                )))
            }
        };
        Ok(options(field)
            .into_iter()
            .filter(|o| selected.contains(&o.value))
            .collect())
    }

    async fn text(&self, locator: &Locator) -> admin_ui::Result<String> {
        let state = self.state.lock().await;
        self.require(&state, locator)?;
        match locator {
            Locator::ValidationError(id) => Ok(self
                .schema
                .field_by_control_id(id)
                .and_then(|f| state.errors.get(&f.key))
                .cloned()
                .unwrap_or_default()),
            Locator::FlashMessage => Ok(state
                .flash
                .as_ref()
                .map(|f| f.text.clone())
                .unwrap_or_default()),
            Locator::Field(_) => {
                let field = self.form_field(&state, locator)?;
                Ok(state
                    .form
                    .get(&field.key)
                    .map(Value::as_text)
                    .unwrap_or_default())
            }
            Locator::Button(label) | Locator::BulkAction(label) => Ok(label.clone()),
            Locator::RowButton { label, .. } => Ok(label.clone()),
            Locator::RowCheckbox(_) | Locator::ConfirmButton | Locator::FlashClose => {
                Ok(String::new())
            }
        }
    }

    async fn has_class(&self, locator: &Locator, class: &str) -> admin_ui::Result<bool> {
        let state = self.state.lock().await;
        self.require(&state, locator)?;
        Ok(match (locator, &state.flash) {
            (Locator::FlashMessage, Some(flash)) => flash.kind.css_class() == class,
            _ => false,
        })
    }

    async fn grid_rows(&self) -> admin_ui::Result<Vec<GridRow>> {
        let state = self.state.lock().await;
        if state.screen != Screen::Index {
            return Ok(Vec::new());
        }
        Ok(state.channels.iter().map(StoredChannel::grid_row).collect())
    }
}
