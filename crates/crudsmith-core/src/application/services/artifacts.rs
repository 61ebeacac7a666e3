//! The artifact plan.
//!
//! Every generated file is described by one [`ArtifactSpec`]: which stub it
//! renders, how its tokens are built and where it lands. The orchestrator
//! walks [`ARTIFACTS`] in order and never special-cases a kind.

use std::path::{Path, PathBuf};

use crate::application::config::GeneratorConfig;
use crate::domain::{
    ArtifactKind, FieldDescriptor, FieldType, FormComponent, GenerationOptions, ResourceName,
    TemplateId, TokenMap, ValidationRule, ValidationRuleBuilder,
    naming::{humanize, to_camel_case, to_pascal_case, to_plural, to_route_name, to_table_name},
};

const PHP_ARRAY_SEP: &str = ",\n        ";
const PHP_RETURN_SEP: &str = "\n            ";
const TS_SEP: &str = "\n  ";
const VUE_SEP: &str = "\n                    ";

/// Everything a token or path builder may read for one run.
pub struct GenerationContext<'a> {
    pub resource: &'a ResourceName,
    pub fields: &'a [FieldDescriptor],
    pub options: &'a GenerationOptions,
    pub config: &'a GeneratorConfig,
    pub rules: &'a ValidationRuleBuilder,
    pub root: &'a Path,
    pub timestamp: String,
    /// `--table` override, or the derived table name.
    pub table: String,
    pub route: String,
    pub model_variable: String,
    pub model_variable_plural: String,
    /// Pascal-cased plural, the views subdirectory.
    pub view_directory: String,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        resource: &'a ResourceName,
        fields: &'a [FieldDescriptor],
        options: &'a GenerationOptions,
        config: &'a GeneratorConfig,
        rules: &'a ValidationRuleBuilder,
        root: &'a Path,
        timestamp: String,
    ) -> Self {
        let name = resource.as_str();
        let model_variable = to_camel_case(name);

        Self {
            resource,
            fields,
            options,
            config,
            rules,
            root,
            timestamp,
            table: options
                .table
                .clone()
                .unwrap_or_else(|| to_table_name(name)),
            route: to_route_name(name),
            model_variable_plural: to_plural(&model_variable),
            model_variable,
            view_directory: to_pascal_case(&to_plural(name)),
        }
    }

    fn name(&self) -> &str {
        self.resource.as_str()
    }

    fn field_lines(&self, sep: &str, line: impl Fn(&FieldDescriptor) -> String) -> String {
        self.fields.iter().map(line).collect::<Vec<_>>().join(sep)
    }
}

/// How one artifact is produced.
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    pub template: TemplateId,
    pub tokens: fn(&GenerationContext<'_>) -> TokenMap,
    pub path: fn(&GenerationContext<'_>) -> PathBuf,
}

impl ArtifactSpec {
    pub fn for_kind(kind: ArtifactKind) -> &'static ArtifactSpec {
        let index = match kind {
            ArtifactKind::Model => 0,
            ArtifactKind::Controller => 1,
            ArtifactKind::StoreRequest => 2,
            ArtifactKind::UpdateRequest => 3,
            ArtifactKind::Resource => 4,
            ArtifactKind::Migration => 5,
            ArtifactKind::IndexView => 6,
            ArtifactKind::CreateView => 7,
            ArtifactKind::EditView => 8,
            ArtifactKind::FormView => 9,
        };
        &ARTIFACTS[index]
    }
}

/// Generation order.
pub static ARTIFACTS: [ArtifactSpec; 10] = [
    ArtifactSpec {
        kind: ArtifactKind::Model,
        template: TemplateId::Model,
        tokens: model_tokens,
        path: model_path,
    },
    ArtifactSpec {
        kind: ArtifactKind::Controller,
        template: TemplateId::Controller,
        tokens: controller_tokens,
        path: controller_path,
    },
    ArtifactSpec {
        kind: ArtifactKind::StoreRequest,
        template: TemplateId::StoreRequest,
        tokens: store_request_tokens,
        path: store_request_path,
    },
    ArtifactSpec {
        kind: ArtifactKind::UpdateRequest,
        template: TemplateId::UpdateRequest,
        tokens: update_request_tokens,
        path: update_request_path,
    },
    ArtifactSpec {
        kind: ArtifactKind::Resource,
        template: TemplateId::Resource,
        tokens: resource_tokens,
        path: resource_path,
    },
    ArtifactSpec {
        kind: ArtifactKind::Migration,
        template: TemplateId::Migration,
        tokens: migration_tokens,
        path: migration_path,
    },
    ArtifactSpec {
        kind: ArtifactKind::IndexView,
        template: TemplateId::IndexView,
        tokens: view_tokens,
        path: index_view_path,
    },
    ArtifactSpec {
        kind: ArtifactKind::CreateView,
        template: TemplateId::CreateView,
        tokens: view_tokens,
        path: create_view_path,
    },
    ArtifactSpec {
        kind: ArtifactKind::EditView,
        template: TemplateId::EditView,
        tokens: view_tokens,
        path: edit_view_path,
    },
    ArtifactSpec {
        kind: ArtifactKind::FormView,
        template: TemplateId::FormView,
        tokens: view_tokens,
        path: form_view_path,
    },
];

/// The artifacts one run produces, in generation order.
pub fn plan(options: &GenerationOptions) -> impl Iterator<Item = &'static ArtifactSpec> + '_ {
    ARTIFACTS
        .iter()
        .filter(move |spec| options.generate_views || !spec.kind.is_view())
}

// ============================================================================
// Paths
// ============================================================================

fn class_path(ctx: &GenerationContext<'_>, kind: ArtifactKind, class: &str) -> PathBuf {
    ctx.root
        .join(ctx.config.paths.dir_for(kind))
        .join(format!("{class}.php"))
}

fn view_path(ctx: &GenerationContext<'_>, page: &str) -> PathBuf {
    ctx.root
        .join(&ctx.config.paths.views)
        .join(&ctx.view_directory)
        .join(format!("{page}.vue"))
}

fn model_path(ctx: &GenerationContext<'_>) -> PathBuf {
    class_path(ctx, ArtifactKind::Model, ctx.name())
}

fn controller_path(ctx: &GenerationContext<'_>) -> PathBuf {
    class_path(ctx, ArtifactKind::Controller, &format!("{}Controller", ctx.name()))
}

fn store_request_path(ctx: &GenerationContext<'_>) -> PathBuf {
    class_path(ctx, ArtifactKind::StoreRequest, &format!("Store{}Request", ctx.name()))
}

fn update_request_path(ctx: &GenerationContext<'_>) -> PathBuf {
    class_path(ctx, ArtifactKind::UpdateRequest, &format!("Update{}Request", ctx.name()))
}

fn resource_path(ctx: &GenerationContext<'_>) -> PathBuf {
    class_path(ctx, ArtifactKind::Resource, &format!("{}Resource", ctx.name()))
}

fn migration_path(ctx: &GenerationContext<'_>) -> PathBuf {
    ctx.root
        .join(&ctx.config.paths.migrations)
        .join(migration_file_name(&ctx.timestamp, &ctx.table))
}

fn index_view_path(ctx: &GenerationContext<'_>) -> PathBuf {
    view_path(ctx, "Index")
}

fn create_view_path(ctx: &GenerationContext<'_>) -> PathBuf {
    view_path(ctx, "Create")
}

fn edit_view_path(ctx: &GenerationContext<'_>) -> PathBuf {
    view_path(ctx, "Edit")
}

fn form_view_path(ctx: &GenerationContext<'_>) -> PathBuf {
    view_path(ctx, "Form")
}

pub fn migration_file_name(timestamp: &str, table: &str) -> String {
    format!("{timestamp}_create_{table}_table.php")
}

/// Glob matching any earlier create-table migration for `table`.
pub fn migration_glob(table: &str) -> String {
    migration_file_name("*", table)
}

// ============================================================================
// Tokens
// ============================================================================

fn model_tokens(ctx: &GenerationContext<'_>) -> TokenMap {
    let opts = ctx.options;

    TokenMap::new()
        .with("NAMESPACE", &ctx.config.namespaces.model)
        .with("CLASS", ctx.name())
        .with(
            "TABLE_PROPERTY",
            opts.table
                .as_ref()
                .map(|t| format!("protected $table = '{t}';\n\n    "))
                .unwrap_or_default(),
        )
        .with(
            "FILLABLE",
            ctx.field_lines(PHP_ARRAY_SEP, |f| format!("'{}'", f.name())),
        )
        .with(
            "CASTS",
            ctx.field_lines(PHP_RETURN_SEP, |f| {
                format!("'{}' => '{}',", f.name(), ctx.config.cast_for(f.field_type()))
            }),
        )
        .with(
            "SOFT_DELETES_IMPORT",
            flag(
                opts.soft_deletes,
                "\nuse Illuminate\\Database\\Eloquent\\SoftDeletes;",
            ),
        )
        .with("SOFT_DELETES_TRAIT", flag(opts.soft_deletes, ", SoftDeletes"))
        .with(
            "AUDITABLE_IMPORT",
            flag(
                opts.auditing,
                "\nuse OwenIt\\Auditing\\Contracts\\Auditable;",
            ),
        )
        .with("AUDITABLE_INTERFACE", flag(opts.auditing, " implements Auditable"))
        .with(
            "AUDITABLE_TRAIT",
            flag(opts.auditing, ", \\OwenIt\\Auditing\\Auditable"),
        )
        .with("RELATIONSHIPS", &opts.relationships)
}

fn controller_tokens(ctx: &GenerationContext<'_>) -> TokenMap {
    let ns = &ctx.config.namespaces;
    let filters = ctx.field_lines(", ", |f| format!("'{}'", f.name()));
    let sorts = if filters.is_empty() {
        "'id', 'created_at'".to_string()
    } else {
        format!("{filters}, 'id', 'created_at'")
    };

    TokenMap::new()
        .with("NAMESPACE", &ns.controller)
        .with("MODEL_NAMESPACE", &ns.model)
        .with("REQUEST_NAMESPACE", &ns.request)
        .with("RESOURCE_NAMESPACE", &ns.resource)
        .with("CLASS", format!("{}Controller", ctx.name()))
        .with("MODEL", ctx.name())
        .with("MODEL_VARIABLE", &ctx.model_variable)
        .with("MODEL_VARIABLE_PLURAL", &ctx.model_variable_plural)
        .with("ROUTE_NAME", &ctx.route)
        .with("VUE_DIRECTORY", &ctx.view_directory)
        .with("EAGER_LOAD", "")
        .with("EAGER_LOAD_SHOW", "")
        .with("EAGER_LOAD_EDIT", "")
        .with("ALLOWED_FILTERS", filters)
        .with("ALLOWED_SORTS", sorts)
}

fn request_tokens(ctx: &GenerationContext<'_>, class: String, rules: String) -> TokenMap {
    TokenMap::new()
        .with("NAMESPACE", &ctx.config.namespaces.request)
        .with("CLASS", class)
        .with("VALIDATION_RULES", rules)
        .with(
            "ATTRIBUTES",
            ctx.field_lines(PHP_RETURN_SEP, |f| {
                format!("'{}' => '{}',", f.name(), humanize(f.name()).to_lowercase())
            }),
        )
}

fn store_request_tokens(ctx: &GenerationContext<'_>) -> TokenMap {
    let rules = ctx.field_lines(PHP_RETURN_SEP, |f| {
        let rendered = ctx
            .rules
            .for_field(f)
            .into_iter()
            .map(|rule| format!("'{}'", rule.resolve_table(&ctx.table)))
            .collect::<Vec<_>>();
        format!("'{}' => [{}],", f.name(), rendered.join(", "))
    });

    request_tokens(ctx, format!("Store{}Request", ctx.name()), rules)
}

fn update_request_tokens(ctx: &GenerationContext<'_>) -> TokenMap {
    let ignore = format!("$this->route('{}')", ctx.model_variable);
    let rules = ctx.field_lines(PHP_RETURN_SEP, |f| {
        let rendered = ctx
            .rules
            .build_for_update(f.name(), f.field_type(), f.modifiers(), &ctx.table, &ignore)
            .iter()
            .map(render_update_rule)
            .collect::<Vec<_>>();
        format!("'{}' => [{}],", f.name(), rendered.join(", "))
    });

    request_tokens(ctx, format!("Update{}Request", ctx.name()), rules)
}

fn render_update_rule(rule: &ValidationRule) -> String {
    match rule {
        ValidationRule::UniqueIgnoring {
            table,
            column,
            ignore,
        } => format!("Rule::unique('{table}', '{column}')->ignore({ignore})"),
        other => format!("'{other}'"),
    }
}

fn resource_tokens(ctx: &GenerationContext<'_>) -> TokenMap {
    TokenMap::new()
        .with("NAMESPACE", &ctx.config.namespaces.resource)
        .with("CLASS", format!("{}Resource", ctx.name()))
        .with(
            "RESOURCE_FIELDS",
            ctx.field_lines(PHP_RETURN_SEP, |f| {
                format!("'{0}' => $this->{0},", f.name())
            }),
        )
        .with(
            "SOFT_DELETE_FIELD",
            flag(
                ctx.options.soft_deletes,
                "\n            'deleted_at' => $this->deleted_at?->toISOString(),",
            ),
        )
}

fn migration_tokens(ctx: &GenerationContext<'_>) -> TokenMap {
    let columns = ctx.field_lines(PHP_RETURN_SEP, |f| {
        let mut line = format!(
            "$table->{}('{}')",
            ctx.config.column_for(f.field_type()),
            f.name()
        );
        if f.is_nullable() {
            line.push_str("->nullable()");
        }
        if f.is_unique() {
            line.push_str("->unique()");
        }
        line.push(';');
        line
    });

    TokenMap::new()
        .with("TABLE", &ctx.table)
        .with("COLUMNS", columns)
        .with(
            "SOFT_DELETES",
            flag(ctx.options.soft_deletes, "\n            $table->softDeletes();"),
        )
        .with("INDEXES", "")
}

fn view_tokens(ctx: &GenerationContext<'_>) -> TokenMap {
    TokenMap::new()
        .with("MODEL", ctx.name())
        .with("MODEL_PLURAL", &ctx.view_directory)
        .with("MODEL_VARIABLE", &ctx.model_variable)
        .with("MODEL_VARIABLE_PLURAL", &ctx.model_variable_plural)
        .with("ROUTE_NAME", &ctx.route)
        .with("VUE_DIRECTORY", &ctx.view_directory)
        .with(
            "TYPE_INTERFACE_FIELDS",
            ctx.field_lines(TS_SEP, |f| {
                let optional = if f.is_nullable() { "?" } else { "" };
                format!("{}{optional}: {};", f.name(), ts_type(f))
            }),
        )
        .with(
            "FORM_INTERFACE_FIELDS",
            ctx.field_lines(TS_SEP, |f| format!("{}: {};", f.name(), ts_type(f))),
        )
        .with(
            "FORM_INITIAL_VALUES",
            ctx.field_lines(TS_SEP, |f| {
                format!("{}: {},", f.name(), f.field_type().form_default())
            }),
        )
        .with(
            "FORM_EDIT_VALUES",
            ctx.field_lines(TS_SEP, |f| {
                format!("{0}: props.{1}.{0},", f.name(), ctx.model_variable)
            }),
        )
        .with(
            "TABLE_HEADERS",
            ctx.field_lines(VUE_SEP, |f| {
                format!("<TableHead>{}</TableHead>", humanize(f.name()))
            }),
        )
        .with("TABLE_CELLS", ctx.field_lines(VUE_SEP, table_cell))
        .with("FORM_FIELDS", ctx.field_lines("\n\n", form_field))
}

fn ts_type(field: &FieldDescriptor) -> String {
    let base = field.field_type().ts_type();
    if field.is_nullable() {
        format!("{base} | null")
    } else {
        base.to_string()
    }
}

fn table_cell(field: &FieldDescriptor) -> String {
    let name = field.name();
    match field.field_type() {
        FieldType::Boolean => {
            format!("<TableCell>{{{{ item.{name} ? 'Yes' : 'No' }}}}</TableCell>")
        }
        _ => format!("<TableCell>{{{{ item.{name} }}}}</TableCell>"),
    }
}

fn form_field(field: &FieldDescriptor) -> String {
    let name = field.name();
    let label = humanize(name);

    match field.field_type().form_component() {
        FormComponent::Checkbox => format!(
            r#"        <div class="flex items-center gap-2">
            <Checkbox id="{name}" v-model="form.{name}" />
            <Label for="{name}">{label}</Label>
        </div>"#
        ),
        FormComponent::Textarea => format!(
            r#"        <div class="grid gap-2">
            <Label for="{name}">{label}</Label>
            <Textarea id="{name}" v-model="form.{name}" rows="4" />
            <InputError :message="form.errors.{name}" />
        </div>"#
        ),
        FormComponent::Input => format!(
            r#"        <div class="grid gap-2">
            <Label for="{name}">{label}</Label>
            <Input id="{name}" v-model="form.{name}" type="{}" />
            <InputError :message="form.errors.{name}" />
        </div>"#,
            input_type(field.field_type())
        ),
    }
}

fn input_type(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Integer | FieldType::Decimal => "number",
        FieldType::Date => "date",
        FieldType::DateTime | FieldType::Timestamp => "datetime-local",
        _ => "text",
    }
}

fn flag(on: bool, text: &str) -> String {
    if on { text.to_string() } else { String::new() }
}
