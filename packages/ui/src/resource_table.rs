//! Read-only table of a backend collection.

use api::{Resource, ResourceRow};
use dioxus::prelude::*;

/// Lists the records of `resource`. Failures show a dismissable notice and leave the
/// session untouched.
#[component]
pub fn ResourceTable(resource: Resource) -> Element {
    let rows = use_resource(move || async move {
        let result = api::list_resource(resource.slug().to_string()).await;
        if let Err(e) = &result {
            tracing::warn!("Listing {} failed: {}", resource.slug(), e);
        }
        result
    });
    let mut dismissed = use_signal(|| false);

    let state = rows.read();
    let view = match &*state {
        None => rsx! {
            div { class: "p-4 text-sm text-neutral-500", "Loading records..." }
        },
        Some(Err(e)) => {
            if dismissed() {
                return rsx! {};
            }
            rsx! {
                div {
                    class: "notice notice-error flex items-center justify-between gap-4 m-4 px-3 py-2 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    span { "Could not load {resource.slug()}: {e}" }
                    button {
                        class: "notice-dismiss",
                        onclick: move |_| dismissed.set(true),
                        "\u{2715}"
                    }
                }
            }
        }
        Some(Ok(rows)) if rows.is_empty() => rsx! {
            div { class: "p-4 text-sm text-neutral-500", "No records yet." }
        },
        Some(Ok(rows)) => {
            let columns = column_names(rows);
            rsx! {
                table {
                    class: "resource-table w-full text-sm",
                    thead {
                        tr {
                            th { "id" }
                            for column in columns.iter() {
                                th { key: "{column}", "{column}" }
                            }
                        }
                    }
                    tbody {
                        for (index, row) in rows.iter().enumerate() {
                            tr {
                                key: "{index}",
                                td { class: "font-mono", "{row.id.as_deref().unwrap_or_default()}" }
                                for column in columns.iter() {
                                    td { "{cell(row, column)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    view
}

/// Union of field names across rows, in first-seen order.
fn column_names(rows: &[ResourceRow]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for (name, _) in &row.fields {
            if !columns.contains(name) {
                columns.push(name.clone());
            }
        }
    }
    columns
}

fn cell<'a>(row: &'a ResourceRow, column: &str) -> &'a str {
    row.fields
        .iter()
        .find(|(name, _)| name == column)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, fields: &[(&str, &str)]) -> ResourceRow {
        ResourceRow {
            id: Some(id.to_string()),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_columns_are_union_in_first_seen_order() {
        let rows = vec![
            row("1", &[("name", "Downtown"), ("status", "open")]),
            row("2", &[("city", "Oslo"), ("name", "Harbour")]),
        ];
        assert_eq!(column_names(&rows), vec!["name", "status", "city"]);
        assert_eq!(cell(&rows[1], "status"), "");
        assert_eq!(cell(&rows[1], "city"), "Oslo");
    }
}
