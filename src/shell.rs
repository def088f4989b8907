//! Interactive command loop over a [`DriveEngine`].

use bytes::Bytes;
use dialoguer::{Confirm, Input};
use tabled::{Table, Tabled, settings::Style};

use breeze_core::error::DriveError;
use breeze_core::result::DriveResult;
use breeze_core::traits::remote::FileUpload;
use breeze_core::types::id::{FileId, FolderId};
use breeze_core::types::share::SharePermission;
use breeze_engine::{DriveEngine, ItemKind, TargetFolder};
use breeze_entity::file::FileItem;
use breeze_entity::folder::Folder;

#[derive(Tabled)]
struct FolderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Files")]
    file_count: u32,
    #[tabled(rename = "Starred")]
    starred: bool,
}

#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Size")]
    size: u64,
    #[tabled(rename = "Type")]
    mime_type: String,
    #[tabled(rename = "Starred")]
    starred: bool,
}

/// Run the shell until `quit` or EOF.
pub async fn run(engine: &DriveEngine) -> DriveResult<()> {
    println!("Breeze Drive shell. Type 'help' for commands.");
    loop {
        let line: String = Input::new()
            .with_prompt(prompt(engine))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| DriveError::internal(format!("Prompt failed: {e}")))?;

        let args: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = args.split_first() else {
            continue;
        };

        match dispatch(engine, command, rest).await {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => return Ok(()),
            // Operation errors were already surfaced by the notifier.
            Err(err) => tracing::debug!(error = %err, command, "command failed"),
        }
    }
}

enum Outcome {
    Continue,
    Quit,
}

fn prompt(engine: &DriveEngine) -> String {
    match engine.current_folder_id() {
        Some(id) => format!("breeze:{}", id),
        None => "breeze:/".to_string(),
    }
}

async fn dispatch(engine: &DriveEngine, command: &str, args: &[&str]) -> DriveResult<Outcome> {
    match command {
        "help" => print_help(),
        "ls" => {
            let contents = engine.current_folder_contents();
            print_folders(&contents.folders);
            print_files(&contents.files);
        }
        "cd" => match args {
            ["/"] => engine.go_to_root().await,
            [".."] => engine.go_back().await,
            [id] => {
                engine
                    .navigate_to_folder(Some(FolderId::new(*id)))
                    .await
            }
            _ => usage("cd </ | .. | folder-id>"),
        },
        "search" => {
            engine.search_files(args.join(" "));
            let folder = engine.current_folder_id();
            engine.fetch_files(folder.as_ref()).await;
            print_files(&engine.state().files);
            engine.clear_search();
        }
        "upload" => match args {
            [path] => {
                let upload = read_upload(path).await?;
                engine.upload_file(upload, TargetFolder::Current).await?;
            }
            _ => usage("upload <path>"),
        },
        "download" => match args {
            [id] => {
                let url = engine.download_file(&FileId::new(*id)).await?;
                println!("{url}");
            }
            _ => usage("download <file-id>"),
        },
        "mkdir" => match args {
            [name] => engine.create_folder(name, TargetFolder::Current).await?,
            _ => usage("mkdir <name>"),
        },
        "rm" => match args {
            ["file", id] => engine.delete_file(&FileId::new(*id)).await?,
            ["folder", id] => engine.delete_folder(&FolderId::new(*id)).await?,
            _ => usage("rm <file|folder> <id>"),
        },
        "rename" => match args {
            ["file", id, name] => engine.rename_file(&FileId::new(*id), name).await?,
            ["folder", id, name] => engine.rename_folder(&FolderId::new(*id), name).await?,
            _ => usage("rename <file|folder> <id> <name>"),
        },
        "star" => match args {
            ["file", id] => engine.star_file(&FileId::new(*id)).await?,
            ["folder", id] => engine.star_folder(&FolderId::new(*id)).await?,
            _ => usage("star <file|folder> <id>"),
        },
        "share" => match args {
            [kind, id, email, rest @ ..] => {
                let kind = parse_kind(kind)?;
                let permission = match rest {
                    [] => SharePermission::View,
                    [p] => p.parse().map_err(DriveError::internal)?,
                    _ => {
                        usage("share <file|folder> <id> <email> [view|edit]");
                        return Ok(Outcome::Continue);
                    }
                };
                engine.share_item(id, kind, email, permission).await?;
            }
            _ => usage("share <file|folder> <id> <email> [view|edit]"),
        },
        "restore" => match args {
            ["file", id] => engine.restore_file(&FileId::new(*id)).await?,
            ["folder", id] => engine.restore_folder(&FolderId::new(*id)).await?,
            _ => usage("restore <file|folder> <id>"),
        },
        "purge" => match args {
            ["file", id] => engine.permanently_delete_file(&FileId::new(*id)).await?,
            ["folder", id] => {
                engine.permanently_delete_folder(&FolderId::new(*id)).await?
            }
            _ => usage("purge <file|folder> <id>"),
        },
        "shared" => {
            engine.fetch_shared_files().await;
            print_files(&engine.state().files);
        }
        "starred" => {
            engine.fetch_starred_files().await;
            print_files(&engine.state().files);
        }
        "recent" => {
            engine.fetch_recent_files().await;
            print_files(&engine.state().files);
        }
        "trash" => {
            engine.fetch_trash().await;
            let state = engine.state();
            print_folders(&state.folders);
            print_files(&state.files);
        }
        "empty-trash" => {
            let confirmed = Confirm::new()
                .with_prompt("Permanently delete everything in the trash?")
                .default(false)
                .interact()
                .map_err(|e| DriveError::internal(format!("Prompt failed: {e}")))?;
            if confirmed {
                engine.empty_trash().await?;
            }
        }
        "quit" | "exit" => return Ok(Outcome::Quit),
        other => println!("Unknown command '{other}'. Type 'help' for commands."),
    }
    Ok(Outcome::Continue)
}

async fn read_upload(path: &str) -> DriveResult<FileUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| DriveError::internal(format!("Failed to read '{path}': {e}")))?;
    let name = std::path::Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
        .to_string();
    Ok(FileUpload::new(name, Bytes::from(bytes)))
}

fn parse_kind(kind: &str) -> DriveResult<ItemKind> {
    match kind {
        "file" => Ok(ItemKind::File),
        "folder" => Ok(ItemKind::Folder),
        other => Err(DriveError::internal(format!("Unknown item kind '{other}'"))),
    }
}

fn print_folders(folders: &[Folder]) {
    if folders.is_empty() {
        return;
    }
    let rows: Vec<FolderRow> = folders
        .iter()
        .map(|f| FolderRow {
            id: f.id.to_string(),
            name: f.name.clone(),
            file_count: f.file_count,
            starred: f.starred,
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::sharp()));
}

fn print_files(files: &[FileItem]) {
    if files.is_empty() {
        println!("(no files)");
        return;
    }
    let rows: Vec<FileRow> = files
        .iter()
        .map(|f| FileRow {
            id: f.id.to_string(),
            name: f.name.clone(),
            size: f.size,
            mime_type: f.mime_type.clone().unwrap_or_default(),
            starred: f.starred,
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::sharp()));
}

fn usage(text: &str) {
    println!("usage: {text}");
}

fn print_help() {
    println!(
        "\
Commands:
  ls                                   list the current folder
  cd </ | .. | folder-id>             navigate
  search <query>                       search files in the current folder
  upload <path>                        upload into the current folder
  download <file-id>                   print a download URL
  mkdir <name>                         create a folder here
  rm <file|folder> <id>                move to trash
  rename <file|folder> <id> <name>     rename
  star <file|folder> <id>              toggle starred
  share <file|folder> <id> <email> [view|edit]
  restore <file|folder> <id>           restore from trash
  purge <file|folder> <id>             delete permanently
  shared | starred | recent | trash    flat views
  empty-trash                          purge the whole trash
  quit"
    );
}
