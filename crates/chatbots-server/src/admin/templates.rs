//! Admin page templates (handlebars)

use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

use super::crud::{CrudTableView, Notice};
use super::form::ChatbotDialogView;

const LAYOUT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
</head>
<body>
<main class="container">
<h1>{{title}}</h1>
"#;

const LAYOUT_FOOT: &str = r#"</main>
</body>
</html>
"#;

const TABLE: &str = r#"<section class="crud">
<div class="crud-toolbar"><a class="button" href="{{admin_path}}?dialog=create">Add {{table.name}}</a></div>
<table>
<thead><tr>{{#each table.headers}}<th>{{this}}</th>{{/each}}<th></th></tr></thead>
<tbody>
{{#each table.rows}}<tr>{{#each cells}}<td>{{this}}</td>{{/each}}<td class="actions"><a href="{{@root.admin_path}}?dialog=edit&amp;id={{key}}">Edit</a> <form method="post" action="{{@root.admin_path}}/{{key}}/delete"><button type="submit">Delete</button></form></td></tr>
{{else}}<tr><td colspan="{{@root.colspan}}">{{#if @root.listing_unavailable}}Could not load {{@root.table.name}} records.{{else}}No {{@root.table.name}} records yet.{{/if}}</td></tr>
{{/each}}</tbody>
</table>
</section>
"#;

const DIALOG: &str = r#"{{#if dialog.open}}<dialog open aria-labelledby="dialog-title">
<h2 id="dialog-title">{{dialog.title}}</h2>
<p>{{dialog.description}}</p>
<form method="post" action="{{admin_path}}" onsubmit="var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent='Saving...';">
{{#if dialog.id}}<input type="hidden" name="id" value="{{dialog.id}}">{{/if}}
<label for="promptType">Type</label>
<select id="promptType" name="promptType">{{#each dialog.prompt_types}}<option value="{{value}}"{{#if selected}} selected{{/if}}>{{label}}</option>{{/each}}</select>
<label for="provider">Provider</label>
<select id="provider" name="provider" required><optgroup label="AI Providers">{{#each dialog.providers}}<option value="{{value}}"{{#if selected}} selected{{/if}}>{{label}}</option>{{/each}}</optgroup></select>
<label for="name">Name</label>
<input id="name" name="name" value="{{dialog.name}}" required>
<label for="instructions">Instructions</label>
<textarea id="instructions" name="instructions">{{dialog.instructions}}</textarea>
<footer><a href="{{admin_path}}">Cancel</a> <button type="submit"{{#if dialog.busy}} disabled{{/if}}>{{dialog.submit_label}}</button></footer>
</form>
</dialog>
{{/if}}"#;

const NOTICE: &str = r#"{{#if notice}}<div class="notice notice-{{notice.kind}}" role="status">{{notice.message}}</div>
{{/if}}"#;

const PAGE: &str = r#"{{> head}}{{> notice}}{{> table}}{{> dialog}}{{> foot}}"#;

const ERROR: &str = r#"{{> head}}<div class="notice notice-error" role="alert">{{message}}</div>
<p><a class="button" href="{{retry_href}}">Retry</a></p>
{{> foot}}"#;

/// The chatbot settings page
#[derive(Debug, Serialize)]
pub struct ChatbotsPageView {
    pub title: &'static str,
    pub admin_path: &'static str,
    pub notice: Option<Notice>,
    pub table: CrudTableView,
    /// The rows could not be read; the table is shown empty around the dialog
    pub listing_unavailable: bool,
    pub colspan: usize,
    pub dialog: ChatbotDialogView,
}

/// Shown instead of the table when the listing cannot be loaded
#[derive(Debug, Serialize)]
pub struct ErrorPageView {
    pub title: &'static str,
    pub message: String,
    pub retry_href: &'static str,
}

/// Compiled admin templates
pub struct AdminTemplates {
    registry: Handlebars<'static>,
}

impl AdminTemplates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_partial("head", LAYOUT_HEAD)?;
        registry.register_partial("foot", LAYOUT_FOOT)?;
        registry.register_partial("notice", NOTICE)?;
        registry.register_partial("table", TABLE)?;
        registry.register_partial("dialog", DIALOG)?;
        registry.register_template_string("page", PAGE)?;
        registry.register_template_string("error", ERROR)?;

        Ok(Self { registry })
    }

    pub fn render_page(&self, view: &ChatbotsPageView) -> Result<String, RenderError> {
        self.registry.render("page", view)
    }

    pub fn render_error(&self, view: &ErrorPageView) -> Result<String, RenderError> {
        self.registry.render("error", view)
    }
}
