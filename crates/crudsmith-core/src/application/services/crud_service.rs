//! CRUD generation use case.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::application::{
    ApplicationError,
    config::GeneratorConfig,
    ports::{Clock, Filesystem, TemplateRenderer},
    services::{
        artifacts::{self, ArtifactSpec, GenerationContext},
        rollback::FileRollback,
    },
};
use crate::domain::{
    ArtifactKind, FieldDefinitionParser, FieldDescriptor, GenerationOptions, GenerationResult,
    OptionOverrides, ResourceName, ValidationRuleBuilder,
};
use crate::error::{CrudError, CrudResult};

/// Generates the full set of CRUD artifacts for one resource.
///
/// Validation and conflict checks run before anything is written. Once the
/// first file lands, every write is tracked and a failure removes them all.
pub struct CrudGenerator {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    clock: Box<dyn Clock>,
    config: GeneratorConfig,
    parser: FieldDefinitionParser,
    rules: ValidationRuleBuilder,
    output_root: PathBuf,
}

impl CrudGenerator {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        clock: Box<dyn Clock>,
        config: GeneratorConfig,
    ) -> Self {
        let rules = ValidationRuleBuilder::with_overrides(config.rule_overrides());

        Self {
            filesystem,
            renderer,
            clock,
            config,
            parser: FieldDefinitionParser,
            rules,
            output_root: PathBuf::new(),
        }
    }

    /// Directory every configured output path is relative to.
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate every artifact for `resource_name`.
    ///
    /// # Errors
    ///
    /// - `CrudError::Domain` when the name or a field definition is invalid.
    ///   Nothing has been written.
    /// - `ApplicationError::FileExists` when a conflict-checked artifact is
    ///   already on disk and `force` is off. Nothing has been written.
    /// - `CrudError::RolledBack` wrapping the first write-phase failure, after
    ///   every file written by this run has been removed.
    /// - `CrudError::RollbackIncomplete` wrapping that failure when some of
    ///   those files could not be removed. It names the files left behind.
    #[instrument(skip(self, field_definitions, overrides), fields(fields = field_definitions.len()))]
    pub fn generate<S: AsRef<str>>(
        &self,
        resource_name: &str,
        field_definitions: &[S],
        overrides: OptionOverrides,
    ) -> CrudResult<GenerationResult> {
        info!("Generating CRUD scaffolding");

        let options = GenerationOptions::resolve(&self.config.defaults, overrides);
        let resource = ResourceName::parse(resource_name, &self.config.reserved_words)?;
        let fields = self.parser.parse_all(field_definitions)?;
        warn_on_duplicates(&fields);

        let ctx = GenerationContext::new(
            &resource,
            &fields,
            &options,
            &self.config,
            &self.rules,
            &self.output_root,
            self.clock.migration_timestamp(),
        );
        debug!(table = %ctx.table, route = %ctx.route, "Derived names");

        if options.force {
            debug!("Conflict check skipped (force)");
        } else {
            self.check_conflicts(&ctx)?;
        }
        self.warn_on_existing_migration(&ctx);

        let mut tx = FileRollback::new(&*self.filesystem);

        match self.write_artifacts(&ctx, &mut tx) {
            Ok(entries) => {
                tx.commit();
                info!(files = entries.len(), "Generation committed");
                Ok(GenerationResult::new(
                    resource.as_str(),
                    ctx.table.clone(),
                    ctx.route.clone(),
                    options.clone(),
                    entries,
                ))
            }
            Err(e) => {
                warn!(error = %e, written = tx.tracked().len(), "Generation failed, rolling back");
                match tx.rollback() {
                    Ok(()) => Err(CrudError::rolled_back(e)),
                    Err(rollback_err) => {
                        warn!(error = %rollback_err, left = tx.leftovers().len(), "Rollback incomplete");
                        Err(CrudError::rollback_incomplete(e, tx.leftovers().to_vec()))
                    }
                }
            }
        }
    }

    fn check_conflicts(&self, ctx: &GenerationContext<'_>) -> CrudResult<()> {
        for kind in ArtifactKind::CONFLICT_CHECKED {
            let path = (ArtifactSpec::for_kind(kind).path)(ctx);
            if self.filesystem.exists(&path) {
                return Err(ApplicationError::FileExists { kind, path }.into());
            }
        }
        Ok(())
    }

    fn warn_on_existing_migration(&self, ctx: &GenerationContext<'_>) {
        let dir = self.output_root.join(&self.config.paths.migrations);
        let pattern = artifacts::migration_glob(&ctx.table);

        match self.filesystem.list_matching(&dir, &pattern) {
            Ok(found) if !found.is_empty() => {
                for path in &found {
                    warn!(path = %path.display(), "A create migration for this table already exists");
                }
            }
            Ok(_) => {}
            Err(e) => debug!(error = %e, "Could not scan for existing migrations"),
        }
    }

    fn write_artifacts(
        &self,
        ctx: &GenerationContext<'_>,
        tx: &mut FileRollback<'_>,
    ) -> CrudResult<Vec<(ArtifactKind, PathBuf)>> {
        let mut entries = Vec::new();
        for spec in artifacts::plan(ctx.options) {
            let path = self.write_artifact(spec, ctx, tx)?;
            entries.push((spec.kind, path));
        }
        Ok(entries)
    }

    /// Render, write and track one artifact.
    fn write_artifact(
        &self,
        spec: &ArtifactSpec,
        ctx: &GenerationContext<'_>,
        tx: &mut FileRollback<'_>,
    ) -> CrudResult<PathBuf> {
        let path = (spec.path)(ctx);
        let contents = self.renderer.render(spec.template, &(spec.tokens)(ctx))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        let existed = self.filesystem.exists(&path);
        if let Err(e) = self.filesystem.write_file(&path, &contents) {
            // A failed write may still have created the file.
            if !existed && self.filesystem.exists(&path) {
                debug!(path = %path.display(), "Tracking partial write");
                tx.track(&path)?;
            }
            return Err(e);
        }
        tx.track(&path)?;

        debug!(kind = %spec.kind, path = %path.display(), "Wrote artifact");
        Ok(path)
    }
}

fn warn_on_duplicates(fields: &[FieldDescriptor]) {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name()) {
            warn!(field = field.name(), "Duplicate field definition");
        }
    }
}

impl std::fmt::Debug for CrudGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrudGenerator")
            .field("output_root", &self.output_root)
            .finish_non_exhaustive()
    }
}
