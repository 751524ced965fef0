//! Settings dialog shell: a category sidebar (or compact category strip)
//! routing to per-category panels inside a modal dialog.
//!
//! ## Usage
//!
//! Use to host application settings panels behind a single modal surface.
//! The shell owns no category state: the active category id is supplied by
//! the caller and selection flows outward through `on_category_change`.
use derive_setters::Setters;
use tessera_ui::{
    CallbackWith, DimensionValue, Dp, Modifier, RenderSlot, State, tessera, use_context,
};

use closure::closure;
use tessera_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    dialog::{DialogController, DialogProviderArgs, dialog_provider},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    scrollable::{ScrollableArgs, scrollable},
    shape_def::Shape,
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::MaterialTheme,
};

const SIDEBAR_WIDTH: Dp = Dp(200.0);
const SIDEBAR_ITEM_HEIGHT: Dp = Dp(36.0);
const SIDEBAR_ITEM_RADIUS: Dp = Dp(18.0);
const CHIP_HEIGHT: Dp = Dp(28.0);
const PANE_MIN_WIDTH: Dp = Dp(320.0);
const PANE_MAX_WIDTH: Dp = Dp(960.0);
const PANE_MAX_HEIGHT: Dp = Dp(640.0);
const CONTENT_PADDING: Dp = Dp(16.0);

/// Grouping scope of a settings category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsScope {
    /// Categories that concern the current user.
    Account,
    /// Categories that concern the whole organization.
    Organization,
}

impl SettingsScope {
    /// Returns the section heading for this scope.
    pub fn label(self) -> &'static str {
        match self {
            SettingsScope::Account => "Account",
            SettingsScope::Organization => "Organization",
        }
    }
}

/// Presentation mode of the settings shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsPresentation {
    /// Sidebar next to the content pane.
    #[default]
    Expanded,
    /// Horizontal category strip above the content pane, for narrow hosts.
    Compact,
}

/// One routable settings category: an identifier, a label, and the panel
/// rendered when the category is active.
#[derive(Clone, PartialEq)]
pub struct SettingsCategory {
    /// Stable identifier reported through `on_category_change`.
    pub id: String,
    /// Label shown in the sidebar or category strip.
    pub label: String,
    /// Grouping scope used for sidebar section headings.
    pub scope: SettingsScope,
    /// Whether the category is offered at all. Hidden categories are skipped
    /// by routing and never rendered.
    pub visible: bool,
    /// Panel content rendered when this category is active.
    pub panel: RenderSlot,
}

impl SettingsCategory {
    /// Creates a visible category.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        scope: SettingsScope,
        panel: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            scope,
            visible: true,
            panel: RenderSlot::new(panel),
        }
    }

    /// Sets whether the category is offered.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Pure routing over a category list: visibility filtering, active-category
/// resolution, and scope grouping. Kept separate from the components so the
/// routing rules are testable without a renderer.
pub struct CategoryRoster<'a> {
    categories: &'a [SettingsCategory],
}

impl<'a> CategoryRoster<'a> {
    /// Wraps a category slice.
    pub fn new(categories: &'a [SettingsCategory]) -> Self {
        Self { categories }
    }

    /// Iterates the categories that are offered.
    pub fn visible(&self) -> impl Iterator<Item = &'a SettingsCategory> {
        self.categories.iter().filter(|category| category.visible)
    }

    /// Resolves the active category: the visible category with the given id,
    /// or the first visible category when the id matches nothing.
    pub fn resolve_active(&self, active_id: &str) -> Option<&'a SettingsCategory> {
        self.visible()
            .find(|category| category.id == active_id)
            .or_else(|| self.visible().next())
    }

    /// Iterates the visible categories belonging to one scope.
    pub fn in_scope(&self, scope: SettingsScope) -> impl Iterator<Item = &'a SettingsCategory> {
        self.visible().filter(move |category| category.scope == scope)
    }

    /// Returns the scopes that have at least one visible category, in
    /// sidebar order.
    pub fn occupied_scopes(&self) -> Vec<SettingsScope> {
        [SettingsScope::Account, SettingsScope::Organization]
            .into_iter()
            .filter(|scope| self.in_scope(*scope).next().is_some())
            .collect()
    }
}

/// Configuration for [`settings_content`].
#[derive(Clone, PartialEq, Setters)]
pub struct SettingsContentArgs {
    /// Optional modifier chain applied to the content pane.
    pub modifier: Modifier,
    /// Categories offered by the shell, in display order.
    #[setters(skip)]
    pub categories: Vec<SettingsCategory>,
    /// Identifier of the active category.
    #[setters(into)]
    pub active_category: String,
    /// Called with a category id when the user selects a category. The owner
    /// stores the id and feeds it back as `active_category`.
    #[setters(skip)]
    pub on_category_change: CallbackWith<String>,
    /// Sidebar or compact strip presentation.
    pub presentation: SettingsPresentation,
}

impl Default for SettingsContentArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new().fill_max_width(),
            categories: Vec::new(),
            active_category: String::new(),
            on_category_change: CallbackWith::new(|_| {}),
            presentation: SettingsPresentation::Expanded,
        }
    }
}

impl SettingsContentArgs {
    /// Sets the category list.
    pub fn categories(mut self, categories: Vec<SettingsCategory>) -> Self {
        self.categories = categories;
        self
    }

    /// Sets the category selection handler.
    pub fn on_category_change<F>(mut self, on_category_change: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_category_change = CallbackWith::new(on_category_change);
        self
    }

    /// Sets the category selection handler using a shared callback.
    pub fn on_category_change_shared(
        mut self,
        on_category_change: impl Into<CallbackWith<String>>,
    ) -> Self {
        self.on_category_change = on_category_change.into();
        self
    }
}

/// Configuration for [`settings_dialog`].
#[derive(Clone, PartialEq, Setters)]
pub struct SettingsDialogArgs {
    /// Dialog open/close state, owned by the caller.
    #[setters(skip)]
    pub controller: State<DialogController>,
    /// Optional override for the dialog title.
    #[setters(strip_option, into)]
    pub title: Option<String>,
    /// Content rendered beneath the dialog (the host application UI).
    #[setters(skip)]
    pub main_content: Option<RenderSlot>,
    /// Routing and presentation configuration forwarded to
    /// [`settings_content`].
    pub content: SettingsContentArgs,
}

impl SettingsDialogArgs {
    /// Creates dialog args with the required controller state.
    pub fn new(controller: State<DialogController>) -> Self {
        Self {
            controller,
            title: None,
            main_content: None,
            content: SettingsContentArgs::default(),
        }
    }

    /// Sets the host content rendered beneath the dialog.
    pub fn main_content<F>(mut self, main_content: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.main_content = Some(RenderSlot::new(main_content));
        self
    }

    /// Sets the host content using a shared render slot.
    pub fn main_content_shared(mut self, main_content: impl Into<RenderSlot>) -> Self {
        self.main_content = Some(main_content.into());
        self
    }
}

/// # settings_dialog
///
/// Render a modal settings shell over the host content.
///
/// ## Usage
///
/// Use as the top-level settings entry point: the caller owns a
/// `DialogController` to open and close the dialog and an active-category id
/// that it updates from `on_category_change`.
///
/// ## Parameters
///
/// - `args` — dialog state, title, and routing configuration; see
///   [`SettingsDialogArgs`].
///
/// ## Examples
///
/// ```no_run
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use tessera_settings::settings_dialog::{
///     SettingsCategory, SettingsDialogArgs, SettingsScope, settings_dialog,
/// };
/// use tessera_components::dialog::DialogController;
/// use tessera_ui::remember;
///
/// let controller = remember(|| DialogController::new(false));
/// let active = remember(|| "general".to_owned());
/// settings_dialog(
///     &SettingsDialogArgs::new(controller).content(
///         tessera_settings::settings_dialog::SettingsContentArgs::default()
///             .categories(vec![SettingsCategory::new(
///                 "general",
///                 "General",
///                 SettingsScope::Account,
///                 || { /* panel */ },
///             )])
///             .active_category(active.get())
///             .on_category_change(move |id| active.set(id)),
///     ),
/// );
/// # }
/// ```
#[tessera]
pub fn settings_dialog(args: &SettingsDialogArgs) {
    let args = args.clone();
    let controller = args.controller;
    let title = args.title.clone();
    let content = args.content.clone();
    let main_content = args
        .main_content
        .clone()
        .unwrap_or_else(|| RenderSlot::new(|| {}));

    dialog_provider(
        &DialogProviderArgs::new(move || {
            controller.with_mut(|c| c.close());
        })
        .controller(controller)
        .main_content_shared(main_content)
        .dialog_content(move || {
            settings_pane(title.clone(), &content);
        }),
    );
}

#[tessera]
fn settings_pane(title: Option<String>, content: &SettingsContentArgs) {
    let content = content.clone();
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().constrain(
                Some(DimensionValue::Wrap {
                    min: Some(PANE_MIN_WIDTH.into()),
                    max: Some(PANE_MAX_WIDTH.into()),
                }),
                Some(DimensionValue::Wrap {
                    min: None,
                    max: Some(PANE_MAX_HEIGHT.into()),
                }),
            ))
            .style(SurfaceStyle::Filled {
                color: scheme.surface_container_high,
            })
            .shape(Shape::rounded_rectangle(Dp(12.0))),
        move || {
            let title = title.clone();
            let content = content.clone();
            column(
                ColumnArgs::default().modifier(Modifier::new().padding_all(CONTENT_PADDING)),
                move |scope| {
                    let title = title.clone();
                    scope.child(move || {
                        pane_title(title.clone());
                    });
                    scope.child(|| {
                        spacer(&SpacerArgs::new(Modifier::new().height(Dp(12.0))));
                    });
                    let content = content.clone();
                    scope.child(move || {
                        settings_content(&content);
                    });
                },
            );
        },
    ));
}

fn pane_title(title: Option<String>) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    let title_text = title.unwrap_or_else(|| "Settings".to_owned());
    text(&TextArgs::from(
        &TextArgs::default()
            .text(title_text)
            .size(theme.typography.title_medium.font_size)
            .color(theme.color_scheme.on_surface),
    ));
}

/// # settings_content
///
/// Render the category router: a sidebar (Expanded) or a horizontal category
/// strip (Compact) next to the active category's panel.
///
/// ## Usage
///
/// Use directly when embedding the settings shell in a non-modal host;
/// [`settings_dialog`] uses it for its dialog body.
///
/// ## Parameters
///
/// - `args` — category list, active id, selection handler, and presentation;
///   see [`SettingsContentArgs`].
#[tessera]
pub fn settings_content(args: &SettingsContentArgs) {
    let args = args.clone();
    let active = {
        let roster = CategoryRoster::new(&args.categories);
        roster.resolve_active(&args.active_category).cloned()
    };

    match args.presentation {
        SettingsPresentation::Expanded => expanded_content(&args, active),
        SettingsPresentation::Compact => compact_content(&args, active),
    }
}

#[tessera]
fn expanded_content(args: &SettingsContentArgs, active: Option<SettingsCategory>) {
    let args = args.clone();
    let categories = args.categories.clone();
    let active_id = active.as_ref().map(|c| c.id.clone()).unwrap_or_default();
    let on_category_change = args.on_category_change.clone();
    let panel = active.map(|c| c.panel);

    row(
        RowArgs::default()
            .modifier(args.modifier)
            .cross_axis_alignment(CrossAxisAlignment::Start),
        move |scope| {
            scope.child({
                let categories = categories.clone();
                let active_id = active_id.clone();
                let on_category_change = on_category_change.clone();
                move || {
                    sidebar(
                        categories.clone(),
                        active_id.clone(),
                        on_category_change.clone(),
                    );
                }
            });
            scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().width(CONTENT_PADDING)));
            });
            scope.child_weighted(
                {
                    let panel = panel.clone();
                    move || {
                        panel_area(panel.clone());
                    }
                },
                1.0,
            );
        },
    );
}

#[tessera]
fn compact_content(args: &SettingsContentArgs, active: Option<SettingsCategory>) {
    let args = args.clone();
    let categories = args.categories.clone();
    let active_id = active.as_ref().map(|c| c.id.clone()).unwrap_or_default();
    let on_category_change = args.on_category_change.clone();
    let panel = active.map(|c| c.panel);

    column(
        ColumnArgs::default().modifier(args.modifier),
        move |scope| {
            scope.child({
                let categories = categories.clone();
                let active_id = active_id.clone();
                let on_category_change = on_category_change.clone();
                move || {
                    category_strip(
                        categories.clone(),
                        active_id.clone(),
                        on_category_change.clone(),
                    );
                }
            });
            scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().height(Dp(12.0))));
            });
            scope.child({
                let panel = panel.clone();
                move || {
                    panel_area(panel.clone());
                }
            });
        },
    );
}

fn panel_area(panel: Option<RenderSlot>) {
    match panel {
        Some(panel) => panel.render(),
        None => {
            let theme = use_context::<MaterialTheme>()
                .expect("MaterialTheme must be provided")
                .get();
            text(&TextArgs::from(
                &TextArgs::default()
                    .text("No settings available")
                    .size(theme.typography.body_medium.font_size)
                    .color(theme.color_scheme.on_surface_variant),
            ));
        }
    }
}

fn sidebar(
    categories: Vec<SettingsCategory>,
    active_id: String,
    on_category_change: CallbackWith<String>,
) {
    let sections: Vec<(SettingsScope, Vec<SettingsCategory>)> = {
        let roster = CategoryRoster::new(&categories);
        roster
            .occupied_scopes()
            .into_iter()
            .map(|scope| (scope, roster.in_scope(scope).cloned().collect()))
            .collect()
    };

    scrollable(
        &ScrollableArgs::default()
            .modifier(Modifier::new().width(SIDEBAR_WIDTH))
            .child({
                let active_id = active_id.clone();
                let on_category_change = on_category_change.clone();
                move || {
                    let sections = sections.clone();
                    let active_id = active_id.clone();
                    let on_category_change = on_category_change.clone();
                    column(ColumnArgs::default(), move |scope| {
                        for (index, (scope_kind, section)) in sections.iter().enumerate() {
                            if index > 0 {
                                scope.child(|| {
                                    spacer(&SpacerArgs::new(Modifier::new().height(Dp(12.0))));
                                });
                            }
                            let heading = scope_kind.label();
                            scope.child(move || {
                                section_heading(heading);
                            });
                            scope.child(|| {
                                spacer(&SpacerArgs::new(Modifier::new().height(Dp(4.0))));
                            });
                            for category in section.iter().cloned() {
                                let selected = category.id == active_id;
                                scope.child(closure!(
                                    clone on_category_change,
                                    || {
                                        sidebar_item(
                                            category.label.clone(),
                                            category.id.clone(),
                                            selected,
                                            on_category_change.clone(),
                                        );
                                    }
                                ));
                            }
                        }
                    });
                }
            }),
    );
}

fn section_heading(label: &'static str) {
    let theme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get();
    text(&TextArgs::from(
        &TextArgs::default()
            .text(label)
            .size(theme.typography.label_small.font_size)
            .color(theme.color_scheme.on_surface_variant),
    ));
}

fn sidebar_item(
    label: String,
    id: String,
    selected: bool,
    on_category_change: CallbackWith<String>,
) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let (container, content) = if selected {
        (scheme.secondary_container, scheme.on_secondary_container)
    } else {
        (scheme.surface_container_high, scheme.on_surface)
    };
    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(
                Modifier::new()
                    .fill_max_width()
                    .height(SIDEBAR_ITEM_HEIGHT),
            )
            .style(SurfaceStyle::Filled { color: container })
            .shape(Shape::rounded_rectangle(SIDEBAR_ITEM_RADIUS))
            .content_alignment(Alignment::CenterStart)
            .on_click(move || {
                on_category_change.call(id.clone());
            }),
        move || {
            let label = label.clone();
            let theme = use_context::<MaterialTheme>()
                .expect("MaterialTheme must be provided")
                .get();
            Modifier::new().padding_all(Dp(8.0)).run(move || {
                text(&TextArgs::from(
                    &TextArgs::default()
                        .text(label.clone())
                        .size(theme.typography.label_medium.font_size)
                        .color(content),
                ));
            });
        },
    ));
}

fn category_strip(
    categories: Vec<SettingsCategory>,
    active_id: String,
    on_category_change: CallbackWith<String>,
) {
    let visible: Vec<SettingsCategory> = CategoryRoster::new(&categories)
        .visible()
        .cloned()
        .collect();

    scrollable(
        &ScrollableArgs::default()
            .modifier(Modifier::new().fill_max_width())
            .horizontal(true)
            .vertical(false)
            .child({
                let active_id = active_id.clone();
                let on_category_change = on_category_change.clone();
                move || {
                    let visible = visible.clone();
                    let active_id = active_id.clone();
                    let on_category_change = on_category_change.clone();
                    row(
                        RowArgs::default()
                            .main_axis_alignment(MainAxisAlignment::Start)
                            .cross_axis_alignment(CrossAxisAlignment::Center),
                        move |scope| {
                            for (index, category) in visible.iter().cloned().enumerate() {
                                if index > 0 {
                                    scope.child(|| {
                                        spacer(&SpacerArgs::new(Modifier::new().width(Dp(6.0))));
                                    });
                                }
                                let selected = category.id == active_id;
                                scope.child(closure!(
                                    clone on_category_change,
                                    || {
                                        category_chip(
                                            category.label.clone(),
                                            category.id.clone(),
                                            selected,
                                            on_category_change.clone(),
                                        );
                                    }
                                ));
                            }
                        },
                    );
                }
            }),
    );
}

fn category_chip(
    label: String,
    id: String,
    selected: bool,
    on_category_change: CallbackWith<String>,
) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let (style, content) = if selected {
        (
            SurfaceStyle::Filled {
                color: scheme.secondary_container,
            },
            scheme.on_secondary_container,
        )
    } else {
        (
            SurfaceStyle::Outlined {
                color: scheme.outline_variant,
                width: Dp(1.0),
            },
            scheme.on_surface,
        )
    };
    surface(&SurfaceArgs::with_child(
        SurfaceArgs::default()
            .modifier(Modifier::new().height(CHIP_HEIGHT))
            .style(style)
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .on_click(move || {
                on_category_change.call(id.clone());
            }),
        move || {
            let label = label.clone();
            let theme = use_context::<MaterialTheme>()
                .expect("MaterialTheme must be provided")
                .get();
            Modifier::new().padding_all(Dp(8.0)).run(move || {
                text(&TextArgs::from(
                    &TextArgs::default()
                        .text(label.clone())
                        .size(theme.typography.label_medium.font_size)
                        .color(content),
                ));
            });
        },
    ));
}

#[cfg(test)]
mod tests {
    use super::{CategoryRoster, SettingsCategory, SettingsScope};

    fn category(id: &str, scope: SettingsScope) -> SettingsCategory {
        SettingsCategory::new(id, id.to_uppercase(), scope, || {})
    }

    fn sample() -> Vec<SettingsCategory> {
        vec![
            category("general", SettingsScope::Account),
            category("notifications", SettingsScope::Account).visible(false),
            category("shortcuts", SettingsScope::Account),
            category("teams", SettingsScope::Organization),
            category("domains", SettingsScope::Organization).visible(false),
        ]
    }

    #[test]
    fn hidden_categories_are_filtered_out() {
        let categories = sample();
        let roster = CategoryRoster::new(&categories);
        let ids: Vec<&str> = roster.visible().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["general", "shortcuts", "teams"]);
    }

    #[test]
    fn active_category_resolves_by_id() {
        let categories = sample();
        let roster = CategoryRoster::new(&categories);
        let active = roster.resolve_active("teams").map(|c| c.id.as_str());
        assert_eq!(active, Some("teams"));
    }

    #[test]
    fn unknown_or_hidden_id_falls_back_to_first_visible() {
        let categories = sample();
        let roster = CategoryRoster::new(&categories);
        assert_eq!(
            roster.resolve_active("missing").map(|c| c.id.as_str()),
            Some("general")
        );
        assert_eq!(
            roster.resolve_active("notifications").map(|c| c.id.as_str()),
            Some("general")
        );
    }

    #[test]
    fn empty_roster_resolves_to_none() {
        let categories: Vec<SettingsCategory> = Vec::new();
        let roster = CategoryRoster::new(&categories);
        assert!(roster.resolve_active("anything").is_none());
    }

    #[test]
    fn scope_grouping_skips_empty_scopes() {
        let categories = vec![category("general", SettingsScope::Account)];
        let roster = CategoryRoster::new(&categories);
        assert_eq!(roster.occupied_scopes(), [SettingsScope::Account]);

        let categories = sample();
        let roster = CategoryRoster::new(&categories);
        assert_eq!(
            roster.occupied_scopes(),
            [SettingsScope::Account, SettingsScope::Organization]
        );
    }

    #[test]
    fn scope_sections_keep_display_order() {
        let categories = sample();
        let roster = CategoryRoster::new(&categories);
        let account: Vec<&str> = roster
            .in_scope(SettingsScope::Account)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(account, ["general", "shortcuts"]);
    }
}
