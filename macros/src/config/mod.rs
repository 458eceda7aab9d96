//! Config derive macro - generates FIELDS, template() and status checks.

mod attr;
mod field;
mod template;
mod types;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::{extract_doc_comment, get_section, get_serde_rename_all};
use field::{FieldInfo, FieldStatus};
use template::generate_template_code;
use types::infer_section;

/// Tokens naming a runtime `FieldStatus` variant.
fn status_tokens(status: FieldStatus) -> Option<TokenStream> {
    match status {
        FieldStatus::Experimental => {
            Some(quote! { crate::config::types::FieldStatus::Experimental })
        }
        FieldStatus::Normal | FieldStatus::Hidden => None,
    }
}

/// Join a section and a key into a dotted path.
fn full_path(section: &str, key: &str) -> String {
    if section.is_empty() {
        key.to_string()
    } else {
        format!("{section}.{key}")
    }
}

/// Generate Config implementation (FIELDS + template + status checks).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let section =
        get_section(&input.attrs).unwrap_or_else(|| infer_section(&name.to_string()));
    let section_doc = extract_doc_comment(&input.attrs).unwrap_or_default();
    let rename_all = get_serde_rename_all(&input.attrs);

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields
        .iter()
        .filter_map(|f| FieldInfo::from_field(f, rename_all.as_deref()))
        .collect();

    // FIELDS struct (skip fields with #[config(skip)])
    let fields_for_path: Vec<_> = field_infos.iter().filter(|f| !f.skip).collect();

    let field_defs = fields_for_path.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = fields_for_path.iter().map(|f| {
        let name = &f.name;
        let path = full_path(&section, &f.key);
        quote! { #name: crate::config::FieldPath::new(#path), }
    });

    // Template (skip hidden and skip fields). Sub sections go last: in TOML
    // every key after a [table] header belongs to that table.
    let mut template_fields: Vec<_> = field_infos
        .iter()
        .filter(|f| !f.skip && f.status != FieldStatus::Hidden)
        .collect();
    template_fields.sort_by_key(|f| f.sub);
    let template_code = generate_template_code(&template_fields);

    // Own fields (non-sub, non-skip) for status checks
    let own_fields: Vec<_> = field_infos.iter().filter(|f| !f.skip && !f.sub).collect();

    let status_checks: Vec<_> = own_fields
        .iter()
        .filter_map(|f| status_tokens(f.status).map(|status| (f, status)))
        .map(|(f, status)| {
            let field_name = &f.name;
            let path = full_path(&section, &f.key);
            quote! {
                if self.#field_name != default.#field_name {
                    crate::config::types::check_field_status(#path, #status, diag);
                }
            }
        })
        .collect();

    let nested_calls: Vec<_> = field_infos
        .iter()
        .filter(|f| !f.skip && f.sub)
        .map(|f| {
            let field_name = &f.name;
            quote! { self.#field_name.validate_field_status(diag); }
        })
        .collect();

    let default_def = if status_checks.is_empty() {
        quote! {}
    } else {
        quote! { let default = Self::default(); }
    };

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Section name for TOML output.
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// Section documentation.
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// Generate TOML template for this config section.
            #[allow(unused_variables)]
            pub fn template() -> String {
                let default = Self::default();
                let mut out = String::new();
                #template_code
                out
            }

            /// Generate TOML template with section header.
            pub fn template_with_header() -> String {
                let mut out = String::new();
                let doc = Self::TEMPLATE_DOC;
                if !doc.is_empty() {
                    for line in doc.lines() {
                        out.push_str("# ");
                        out.push_str(line.trim());
                        out.push('\n');
                    }
                }
                let section = Self::TEMPLATE_SECTION;
                if !section.is_empty() {
                    out.push('[');
                    out.push_str(section);
                    out.push_str("]\n");
                }
                out.push_str(&Self::template());
                out
            }

            /// Report experimental fields set away from their defaults.
            #[allow(unused_variables)]
            pub fn validate_field_status(&self, diag: &mut crate::config::ConfigDiagnostics) {
                #default_def
                #(#status_checks)*
                #(#nested_calls)*
            }
        }
    }
}
