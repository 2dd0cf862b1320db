use std::io::Write;

use tudofresco_domain::{Page, StoreResponse};

use crate::cli::CreateStoreArgs;
use crate::context::AppContext;
use crate::utils::output::Output;

pub async fn list<W: Write>(
    ctx: &AppContext,
    page: Page,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let stores = ctx.stores.list_by_user(page).await?;
    out.record(&stores, |w, stores| {
        if stores.is_empty() {
            return writeln!(w, "No stores");
        }
        stores.iter().try_for_each(|store| write_store_line(w, store))
    })
}

pub async fn fresh_fill<W: Write>(
    ctx: &AppContext,
    cnpj: &str,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let store = ctx.stores.fresh_fill(cnpj).await?;
    out.record(&store, |w, store| {
        writeln!(w, "{}", store.display_name())?;
        for (label, value) in [
            ("CNPJ", &store.cnpj),
            ("Legal name", &store.legal_name),
            ("Legal nature", &store.legal_nature),
            ("CNAE", &store.cnae_code),
            ("Opened", &store.opening_date),
            ("Phone", &store.legal_phone_contact),
            ("Email", &store.legal_email_contact),
        ] {
            if let Some(value) = value {
                writeln!(w, "  {label}: {value}")?;
            }
        }
        Ok(())
    })
}

/// Register a store: the CNPJ registry data is looked up first and the
/// flags only replace what the caller chose to change.
pub async fn create<W: Write>(
    ctx: &AppContext,
    args: CreateStoreArgs,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let registry = ctx.stores.fresh_fill(&args.cnpj).await?;
    let mut request = registry.into_request(args.address_uuid);
    request.store_type = args.store_type;
    if let Some(trade_name) = args.trade_name {
        request.trade_name = trade_name;
    }
    if let Some(phone) = args.phone {
        request.preferred_phone_contact = phone;
    }
    if let Some(email) = args.email {
        request.preferred_email_contact = email;
    }
    if request.trade_name.is_empty() {
        request.trade_name.clone_from(&request.legal_name);
    }

    ctx.stores.create(&request).await?;
    out.message(format_args!("Store {} created", request.trade_name))
}

fn write_store_line<W: Write>(w: &mut W, store: &StoreResponse) -> std::io::Result<()> {
    let city = store.address.as_ref().map(|a| a.summary()).unwrap_or_default();
    writeln!(
        w,
        "{}  {}  {}  {}",
        store.meta.uuid,
        store.display_name(),
        store.store_type.label(),
        city
    )
}
