use crate::host::{DocumentTree, FontCatalog, FontName, HostError, NodeId, NodeKind};

/// Family shown when a catalog entry carries no family name.
pub const UNKNOWN_FAMILY: &str = "Unknown Family";

/// One `{family}` record per catalog entry, in catalog order.
pub fn family_names(entries: &[FontName]) -> Vec<String> {
    entries
        .iter()
        .map(|f| {
            if f.family.is_empty() {
                UNKNOWN_FAMILY.to_string()
            } else {
                f.family.clone()
            }
        })
        .collect()
}

/// Style names the catalog offers for one family.
pub fn weights_for(entries: &[FontName], family: &str) -> Vec<String> {
    entries
        .iter()
        .filter(|f| f.family == family)
        .map(|f| f.style.clone())
        .collect()
}

/// Load `font` and write it onto every requested node that still resolves to
/// a text node; missing or non-text ids are skipped. A load failure mutates
/// nothing. Returns how many nodes were rewritten.
pub fn replace_selected<H>(host: &mut H, font: &FontName, ids: &[NodeId]) -> Result<usize, HostError>
where
    H: DocumentTree + FontCatalog,
{
    host.load_font(font)?;

    let mut applied = 0;
    for id in ids {
        if host.node_kind(id) == Some(NodeKind::Text) {
            host.set_font(id, font);
            applied += 1;
        }
    }
    Ok(applied)
}

/// Load `font` and write it onto every text node on the current page,
/// regardless of selection. Returns how many nodes were rewritten.
pub fn replace_all<H>(host: &mut H, font: &FontName) -> Result<usize, HostError>
where
    H: DocumentTree + FontCatalog,
{
    host.load_font(font)?;

    let page = host.current_page();
    let targets = host.find_text_descendants(&page);
    for id in &targets {
        host.set_font(id, font);
    }
    Ok(targets.len())
}
