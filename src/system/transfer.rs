// Transfer engine - 복사/이동/압축 해제 실행
//
// 이벤트 루프가 틱마다 엔트리 하나씩 처리한다. 충돌 정책의 해석(다이얼로그
// 표시 등)은 app 쪽 몫이고, 여기는 실제 파일 작업만 담당한다.

#![allow(dead_code)]

use crate::models::transfer::{PlannedEntry, TransferKind, TransferRequest};
use crate::utils::error::{BokslCmdError, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// 이름 변경 대체 경로 탐색 횟수 상한
const RENAME_PROBE_LIMIT: u32 = 100;

/// 전송 요청을 엔트리 목록으로 계획
///
/// 원본이 하나이고 새 이름이 지정된 경우에만 이름 변경이 적용된다.
/// 압축 해제는 대상 디렉토리 자체가 엔트리의 목적지가 된다.
pub fn plan_entries(request: &TransferRequest) -> Vec<PlannedEntry> {
    request
        .sources
        .iter()
        .filter_map(|source| {
            let file_name = source.file_name()?.to_string_lossy().to_string();

            let dest = match request.kind {
                TransferKind::Unzip => request.dest_dir.clone(),
                _ => {
                    let name = if request.sources.len() == 1 {
                        request.new_name.clone().unwrap_or(file_name)
                    } else {
                        file_name
                    };
                    request.dest_dir.join(name)
                }
            };

            Some(PlannedEntry {
                source: source.clone(),
                dest,
            })
        })
        .collect()
}

/// 엔트리 하나 실행 (충돌 판정은 호출자가 끝냈다고 가정)
pub fn transfer_entry(kind: TransferKind, source: &Path, dest: &Path, overwrite: bool) -> Result<()> {
    match kind {
        TransferKind::Copy | TransferKind::Download => copy_entry(source, dest),
        TransferKind::Move => move_entry(source, dest),
        TransferKind::Unzip => {
            extract_zip(source, dest, overwrite)?;
            Ok(())
        }
    }
}

/// 파일/디렉토리 복사
pub fn copy_entry(source: &Path, dest: &Path) -> Result<()> {
    if source.is_dir() {
        copy_dir_recursive(source, dest)
    } else {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, dest)?;
        Ok(())
    }
}

/// 디렉토리 재귀 복사
fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let child_dest = dest.join(entry.file_name());
        if entry.path().is_dir() {
            copy_dir_recursive(&entry.path(), &child_dest)?;
        } else {
            fs::copy(entry.path(), &child_dest)?;
        }
    }
    Ok(())
}

/// 파일/디렉토리 이동 (rename 실패 시 복사 + 삭제)
pub fn move_entry(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    if fs::rename(source, dest).is_ok() {
        return Ok(());
    }

    // 파일시스템 경계를 넘는 이동
    copy_entry(source, dest)?;
    if source.is_dir() {
        fs::remove_dir_all(source)?;
    } else {
        fs::remove_file(source)?;
    }
    Ok(())
}

/// 압축 해제 시 대상과 충돌하는 엔트리 이름 목록
pub fn list_zip_conflicts(archive_path: &Path, dest_dir: &Path) -> Result<Vec<String>> {
    let file = File::open(archive_path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| BokslCmdError::Archive(e.to_string()))?;

    let mut conflicts = Vec::new();
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| BokslCmdError::Archive(e.to_string()))?;
        let Some(relative) = entry.enclosed_name() else {
            continue;
        };
        if entry.is_dir() {
            continue;
        }
        if dest_dir.join(&relative).exists() {
            conflicts.push(relative.to_string_lossy().to_string());
        }
    }
    Ok(conflicts)
}

/// 압축 해제 실행, 풀린 엔트리 수 반환
///
/// overwrite가 false면 이미 존재하는 파일은 건너뛴다.
pub fn extract_zip(archive_path: &Path, dest_dir: &Path, overwrite: bool) -> Result<usize> {
    let file = File::open(archive_path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| BokslCmdError::Archive(e.to_string()))?;

    let mut extracted = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| BokslCmdError::Archive(e.to_string()))?;

        // zip 내부의 탈출 경로(../) 차단
        let Some(relative) = entry.enclosed_name() else {
            continue;
        };
        let out_path = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }

        if out_path.exists() && !overwrite {
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out_file = File::create(&out_path)?;
        io::copy(&mut entry, &mut out_file)?;
        extracted += 1;
    }

    Ok(extracted)
}

/// 이름 변경 정책용 대체 경로 탐색: "name (1).ext", "name (2).ext", ...
pub fn rename_alternative(dest: &Path) -> Option<PathBuf> {
    let parent = dest.parent()?;
    let stem = dest.file_stem()?.to_string_lossy().to_string();
    let extension = dest.extension().map(|e| e.to_string_lossy().to_string());

    for n in 1..=RENAME_PROBE_LIMIT {
        let candidate_name = match &extension {
            Some(ext) => format!("{} ({}).{}", stem, n, ext),
            None => format!("{} ({})", stem, n),
        };
        let candidate = parent.join(candidate_name);
        if !candidate.exists() {
            return Some(candidate);
        }
    }
    None
}
