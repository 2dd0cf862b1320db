//! Session commands: login, logout, whoami, signup

use std::io::Write;

use chrono::DateTime;
use tudofresco_domain::{LoginCredentials, UserSignUpRequest};

use crate::cli::SignupArgs;
use crate::context::AppContext;
use crate::utils::output::Output;

pub async fn login<W: Write>(
    ctx: &AppContext,
    username: String,
    password: String,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let credentials = LoginCredentials::new(username, password);
    ctx.auth.login(&credentials).await?;

    let snapshot = ctx.session.snapshot();
    out.record(&snapshot, |w, s| writeln!(w, "Signed in as {}", s.role.label()))
}

pub fn logout<W: Write>(ctx: &AppContext, out: &mut Output<W>) -> anyhow::Result<()> {
    ctx.auth.logout();
    out.message("Signed out")
}

/// Local view of the session. Makes no request.
pub fn whoami<W: Write>(ctx: &AppContext, out: &mut Output<W>) -> anyhow::Result<()> {
    let snapshot = ctx.session.snapshot();
    out.record(&snapshot, |w, s| {
        if !s.authenticated {
            return writeln!(w, "Not signed in");
        }
        let user = s.user_id.as_deref().unwrap_or_default();
        write!(w, "{user} ({})", s.role.label())?;
        match s.expires_at.and_then(|secs| DateTime::from_timestamp(secs, 0)) {
            Some(expires) => writeln!(w, ", session expires {}", expires.to_rfc3339()),
            None => writeln!(w),
        }
    })
}

pub async fn signup<W: Write>(
    ctx: &AppContext,
    args: SignupArgs,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let request = UserSignUpRequest {
        name: args.name,
        email: args.email,
        date_of_birth: args.date_of_birth,
        gender: args.gender,
        phone_number: args.phone_number,
        profile_picture: String::new(),
        password: args.password,
        user_access: args.user_access,
    };
    ctx.users.sign_up(&request).await?;
    out.message(format_args!("Account created for {}", request.email))
}
