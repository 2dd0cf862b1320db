//! Demand listings, details, publishing and the reel feed

use std::io::Write;

use tudofresco_domain::{DemandFilter, DemandRequest, DemandResponse, DemandStatus};

use crate::cli::{CreateDemandArgs, FilterArgs};
use crate::context::AppContext;
use crate::utils::output::Output;

fn filter_from(args: FilterArgs) -> DemandFilter {
    DemandFilter::for_store(args.store)
        .with_page(args.page.into())
        .with_radius(args.radius_meters)
        .with_product_type(args.product_type)
}

pub async fn list<W: Write>(
    ctx: &AppContext,
    filter: FilterArgs,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let demands = ctx.demands.list_by_store(&filter_from(filter)).await?;
    out.record(&demands, |w, demands| write_demand_lines(w, demands, "No demands"))
}

pub async fn show<W: Write>(
    ctx: &AppContext,
    demand_uuid: &str,
    store_uuid: &str,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let demand = ctx.demands.get_by_uuid(demand_uuid, store_uuid).await?;
    out.record(&demand, |w, d| {
        writeln!(w, "{}  {}", d.product.name, d.status.label())?;
        writeln!(w, "  Store: {}", d.store.display_name())?;
        match d.minimum_count {
            Some(minimum) => writeln!(w, "  Quantity: {} (minimum {minimum})", d.needed_count)?,
            None => writeln!(w, "  Quantity: {}", d.needed_count)?,
        }
        writeln!(w, "  Unit: {}", d.product.unit_type.label())?;
        writeln!(w, "  Deadline: {}", d.deadline)?;
        if let Some(responsible) = &d.responsible {
            writeln!(w, "  Responsible: {}", responsible.name)?;
        }
        if !d.description.is_empty() {
            writeln!(w, "  {}", d.description)?;
        }
        Ok(())
    })
}

pub async fn create<W: Write>(
    ctx: &AppContext,
    args: CreateDemandArgs,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let request = DemandRequest {
        store_uuid: args.store,
        product_uuid: args.product,
        responsible_uuid: None,
        needed_count: args.needed,
        minimum_count: args.minimum,
        description: args.description,
        deadline: args.deadline,
        status: args.status,
    };
    ctx.demands.create(&request).await?;
    out.message("Demand published")
}

pub async fn reel<W: Write>(
    ctx: &AppContext,
    filter: FilterArgs,
    status: DemandStatus,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let filter = filter_from(filter).with_status(status);
    let posts = ctx.reel.posts(&filter).await?;
    out.record(&posts, |w, posts| write_demand_lines(w, posts, "No posts nearby"))
}

fn write_demand_lines<W: Write>(
    w: &mut W,
    demands: &[DemandResponse],
    empty: &str,
) -> std::io::Result<()> {
    if demands.is_empty() {
        return writeln!(w, "{empty}");
    }
    for demand in demands {
        writeln!(
            w,
            "{}  {}  {} {}  {}  {}  until {}",
            demand.meta.uuid,
            demand.product.name,
            demand.needed_count,
            demand.product.unit_type.label(),
            demand.store.display_name(),
            demand.status.label(),
            demand.deadline
        )?;
    }
    Ok(())
}
