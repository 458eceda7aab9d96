//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::{FieldInfo, FieldStatus};
use crate::config::types::{format_default_for_type, type_to_string};

/// Generate template code (TokenStream) for fields
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let field_codes: Vec<TokenStream> = fields
        .iter()
        .map(|f| generate_field_template_code(f))
        .collect();

    quote! {
        #(#field_codes)*
    }
}

/// Render `key = value` with an optional trailing comment.
fn line(prefix: &str, key: &str, value: &str, inline: Option<&String>) -> String {
    match inline {
        Some(comment) => format!("{prefix}{key} = {value}  # {comment}\n"),
        None => format!("{prefix}{key} = {value}\n"),
    }
}

/// Generate TOML template code for a single field
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let key = &info.key;
    let inline = info.inline_doc.as_ref();

    let doc_code = if let Some(ref doc) = info.doc {
        let doc_lines: Vec<_> = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
        let doc_str = doc_lines.join("");
        quote! { out.push_str(#doc_str); }
    } else {
        quote! {}
    };

    let (is_commented, status_comment) = match info.status {
        FieldStatus::Normal => (false, None),
        FieldStatus::Experimental => (
            true,
            Some("# (experimental) this option may change or be removed\n"),
        ),
        FieldStatus::Hidden => return quote! {},
    };

    let status_code = if let Some(comment) = status_comment {
        quote! { out.push_str(#comment); }
    } else {
        quote! {}
    };

    let ty_str = type_to_string(&info.ty);
    let is_optional = ty_str.starts_with("Option<");

    // Sub configs bring their own [section] header
    if info.sub {
        let field_ty = &info.ty;
        return quote! {
            out.push('\n');
            #doc_code
            out.push_str(&<#field_ty>::template_with_header());
        };
    }

    // Optional fields without explicit default are commented out
    if is_optional && info.default.is_none() {
        let text = line("# ", key, "\"\"", inline);
        return quote! {
            #doc_code
            #status_code
            out.push_str(#text);
        };
    }

    let prefix = if is_commented { "# " } else { "" };

    // Explicit default value (compile-time known)
    if let Some(ref default_val) = info.default {
        let formatted = format_default_for_type(default_val, &ty_str);
        let text = line(prefix, key, &formatted, inline);
        return quote! {
            #doc_code
            #status_code
            out.push_str(#text);
        };
    }

    // Default::default() rendered at runtime
    let trailer = match inline {
        Some(comment) => format!("  # {comment}\n"),
        None => "\n".to_string(),
    };
    quote! {
        #doc_code
        #status_code
        out.push_str(#prefix);
        out.push_str(#key);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push_str(#trailer);
    }
}
