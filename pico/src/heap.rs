//! Global heap backing the per-frame pixel buffers.
//!
//! One full RGB565 frame is 134,400 bytes; the region leaves room for
//! one frame plus allocator bookkeeping. RP2350 SRAM is reachable by the
//! DMA engine throughout, so anything allocated here is DMA-capable.

use core::mem::MaybeUninit;
use core::ptr::addr_of_mut;

use lcdcycle_common::config::FRAME_BYTES;
use linked_list_allocator::LockedHeap;

#[global_allocator]
static HEAP: LockedHeap = LockedHeap::empty();

/// Frame payload plus slack for allocator metadata and alignment.
const HEAP_SIZE: usize = FRAME_BYTES + 8 * 1024;

static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];

/// Hand the static region to the allocator. Must run once, before the
/// demo task takes its first frame.
pub fn init() {
    unsafe {
        HEAP.lock().init(addr_of_mut!(HEAP_MEM).cast::<u8>(), HEAP_SIZE);
    }
}
