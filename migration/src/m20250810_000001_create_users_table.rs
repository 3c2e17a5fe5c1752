use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Bio)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::ProfilePicture)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Users::Otp).string_len(6).null())
                    .col(
                        ColumnDef::new(Users::OtpExpiryTime)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Users::ResetPasswordExpiry)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Username is looked up at signup (conflict check) but is not unique
        // at the DB level; the application enforces it via a single OR lookup.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_username
                ON users (username);
                "#,
            )
            .await?;

        // Reset-state fields are consulted lazily; partial indexes keep the
        // lookups cheap without indexing the (mostly null) idle rows.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_otp_active
                ON users (email)
                WHERE otp IS NOT NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_reset_pending
                ON users (id)
                WHERE reset_password_expiry IS NOT NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_users_created_at
                ON users (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_users_username;
                DROP INDEX IF EXISTS idx_users_otp_active;
                DROP INDEX IF EXISTS idx_users_reset_pending;
                DROP INDEX IF EXISTS idx_users_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Bio,
    ProfilePicture,
    Otp,
    OtpExpiryTime,
    ResetPasswordExpiry,
    CreatedAt,
    UpdatedAt,
}
