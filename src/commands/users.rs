use anyhow::Result;
use log::debug;

use crate::api::{NoteHubApi, User, UserUpdate};

/// Show a user's profile.
#[tracing::instrument(skip(api))]
pub async fn show_user<A: NoteHubApi>(api: &A, user_id: u64) -> Result<()> {
    let user = api.user(user_id).await?;
    print_user(&user);
    Ok(())
}

/// Update a user's profile fields. At least one field must be given.
#[tracing::instrument(skip(api, username, student_number, email))]
pub async fn update_user<A: NoteHubApi>(
    api: &A,
    user_id: u64,
    username: Option<String>,
    student_number: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let update = UserUpdate {
        username,
        student_number,
        email,
    };
    if update.is_empty() {
        anyhow::bail!(
            "Nothing to update. Pass at least one of --username, --student-number, --email."
        );
    }

    debug!("Updating user {}", user_id);
    let user = api.update_user(user_id, &update).await?;

    println!("Updated user {}", user.id);
    print_user(&user);
    Ok(())
}

/// Delete a user. The backend also removes the user's note spaces.
#[tracing::instrument(skip(api))]
pub async fn delete_user<A: NoteHubApi>(api: &A, user_id: u64) -> Result<()> {
    api.delete_user(user_id).await?;
    println!("Deleted user {}", user_id);
    Ok(())
}

fn print_user(user: &User) {
    println!("User {}", user.id);
    println!("  username:       {}", user.username);
    println!("  student number: {}", user.student_number);
    println!("  email:          {}", user.email);
}
