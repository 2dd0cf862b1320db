use std::io::Write;
use std::path::Path;

use tudofresco_infra::UploadFile;

use crate::context::AppContext;
use crate::utils::output::Output;

pub async fn show<W: Write>(ctx: &AppContext, out: &mut Output<W>) -> anyhow::Result<()> {
    let user = ctx.users.current_user().await?;
    out.record(&user, |w, user| {
        writeln!(w, "{} <{}>", user.name, user.email)?;
        writeln!(w, "  Access: {}", user.user_access.label())?;
        writeln!(w, "  Verification: {}", user.verification_status.label())?;
        if let Some(phone) = &user.phone_number {
            writeln!(w, "  Phone: {phone}")?;
        }
        if let Some(gender) = user.gender {
            writeln!(w, "  Gender: {}", gender.label())?;
        }
        Ok(())
    })
}

pub async fn picture<W: Write>(ctx: &AppContext, out: &mut Output<W>) -> anyhow::Result<()> {
    let url = ctx.users.signed_profile_picture_url().await?;
    out.record(&url, |w, url| writeln!(w, "{url}"))
}

pub async fn upload_picture<W: Write>(
    ctx: &AppContext,
    file: &Path,
    out: &mut Output<W>,
) -> anyhow::Result<()> {
    let upload = UploadFile::from_path(file).await?;
    ctx.users.upload_profile_picture(upload).await?;
    out.message("Profile picture updated")
}
