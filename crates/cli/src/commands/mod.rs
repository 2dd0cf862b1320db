//! Command handlers
//!
//! Each handler calls one service operation and renders the result through
//! [`Output`]. Gateway errors are returned as is so the binary can print the
//! user-facing message.

pub mod auth;
pub mod demands;
pub mod products;
pub mod profile;
pub mod stores;

use std::io::Write;

use tudofresco_core::MEMBER_ROLES;
use tudofresco_infra::ApiError;

use crate::cli::{Commands, DemandCommands, ProductCommands, ProfileCommands, StoreCommands};
use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;
use crate::utils::output::Output;

/// Run one parsed command against the context
///
/// # Errors
/// Returns the gateway error, or a local error when an input file cannot be
/// read or output cannot be written.
pub async fn dispatch<W: Write>(
    ctx: &AppContext,
    command: Commands,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let name = command_name(&command);
    execute_logged(name, || async move {
        match command {
            Commands::Login { username, password } => {
                auth::login(ctx, username, password, out).await
            }
            Commands::Logout => auth::logout(ctx, out),
            Commands::Whoami => auth::whoami(ctx, out),
            Commands::Signup(args) => auth::signup(ctx, args, out).await,
            Commands::Stores { command } => {
                require_member(ctx)?;
                match command {
                    StoreCommands::List { page } => stores::list(ctx, page.into(), out).await,
                    StoreCommands::FreshFill { cnpj } => stores::fresh_fill(ctx, &cnpj, out).await,
                    StoreCommands::Create(args) => stores::create(ctx, args, out).await,
                }
            }
            Commands::Products { command } => match command {
                ProductCommands::Search { name, page, per_page } => {
                    products::search(ctx, name, page, per_page, out).await
                }
                ProductCommands::Create { name, unit_type, product_type } => {
                    require_member(ctx)?;
                    products::create(ctx, name, unit_type, product_type, out).await
                }
                ProductCommands::UploadImage { product_uuid, file } => {
                    require_member(ctx)?;
                    products::upload_image(ctx, &product_uuid, &file, out).await
                }
            },
            Commands::Demands { command } => {
                require_member(ctx)?;
                match command {
                    DemandCommands::List { filter } => demands::list(ctx, filter, out).await,
                    DemandCommands::Show { demand_uuid, store } => {
                        demands::show(ctx, &demand_uuid, &store, out).await
                    }
                    DemandCommands::Create(args) => demands::create(ctx, args, out).await,
                }
            }
            Commands::Reel { filter, status } => {
                require_member(ctx)?;
                demands::reel(ctx, filter, status, out).await
            }
            Commands::Profile { command } => {
                require_member(ctx)?;
                match command {
                    ProfileCommands::Show => profile::show(ctx, out).await,
                    ProfileCommands::Picture => profile::picture(ctx, out).await,
                    ProfileCommands::UploadPicture { file } => {
                        profile::upload_picture(ctx, &file, out).await
                    }
                }
            }
        }
    })
    .await
}

/// Members area guard: a valid session with a member role
fn require_member(ctx: &AppContext) -> Result<(), ApiError> {
    if ctx.session.has_access(MEMBER_ROLES) {
        Ok(())
    } else {
        Err(ApiError::Unauthenticated)
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Login { .. } => "auth::login",
        Commands::Logout => "auth::logout",
        Commands::Whoami => "auth::whoami",
        Commands::Signup(_) => "auth::signup",
        Commands::Stores { command } => match command {
            StoreCommands::List { .. } => "stores::list",
            StoreCommands::FreshFill { .. } => "stores::fresh_fill",
            StoreCommands::Create(_) => "stores::create",
        },
        Commands::Products { command } => match command {
            ProductCommands::Search { .. } => "products::search",
            ProductCommands::Create { .. } => "products::create",
            ProductCommands::UploadImage { .. } => "products::upload_image",
        },
        Commands::Demands { command } => match command {
            DemandCommands::List { .. } => "demands::list",
            DemandCommands::Show { .. } => "demands::show",
            DemandCommands::Create(_) => "demands::create",
        },
        Commands::Reel { .. } => "reel::posts",
        Commands::Profile { command } => match command {
            ProfileCommands::Show => "profile::show",
            ProfileCommands::Picture => "profile::picture",
            ProfileCommands::UploadPicture { .. } => "profile::upload_picture",
        },
    }
}
